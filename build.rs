#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Icon is optional: only embed it when present in the source tree
    let mut res = WindowsResource::new();
    if std::path::Path::new("res/horimetro.ico").exists() {
        res.set_icon("res/horimetro.ico");
    }
    res.set("FileDescription", "Horimetro CLI")
        .set("ProductName", "Horimetro")
        .set("OriginalFilename", "horimetro.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"));
    res.compile().expect("Failed to embed Windows resources");
}

#[cfg(not(target_os = "windows"))]
fn main() {}

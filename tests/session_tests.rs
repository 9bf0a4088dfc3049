use horimetro::config::{AccessConfig, Config, Credential};
use horimetro::core::session::{
    ConfiguredAccess, CredentialVerifier, OpenAccess, Session, SessionState, verifier_for,
};
use horimetro::errors::AppError;

fn gate() -> AccessConfig {
    AccessConfig {
        users: vec![Credential {
            user: "encarregado".into(),
            password: "turno1".into(),
        }],
    }
}

#[test]
fn test_new_session_is_anonymous_and_denied() {
    let session = Session::new();
    assert_eq!(session.state(), &SessionState::Anonymous);
    assert!(matches!(session.require(), Err(AppError::AccessDenied(_))));
}

#[test]
fn test_open_access_logs_in_without_credentials() {
    let mut session = Session::new();
    session.login(&OpenAccess, None, None).unwrap();
    assert_eq!(session.require().unwrap(), "anonymous");

    let mut named = Session::new();
    named.login(&OpenAccess, Some("Ana"), None).unwrap();
    assert_eq!(named.require().unwrap(), "Ana");
}

#[test]
fn test_configured_access_requires_valid_credentials() {
    let verifier = ConfiguredAccess::new(&gate());
    let mut session = Session::new();

    assert!(matches!(
        session.login(&verifier, None, None),
        Err(AppError::AccessDenied(_))
    ));
    assert!(matches!(
        session.login(&verifier, Some("encarregado"), Some("errada")),
        Err(AppError::AccessDenied(_))
    ));
    assert!(!session.is_authenticated());

    session
        .login(&verifier, Some("encarregado"), Some("turno1"))
        .unwrap();
    assert_eq!(
        session.state(),
        &SessionState::Authenticated {
            user: "encarregado".into()
        }
    );

    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn test_verifier_follows_configuration() {
    let open = Config {
        access: None,
        ..Config::default()
    };
    assert!(verifier_for(&open).allows_anonymous());

    let empty_gate = Config {
        access: Some(AccessConfig::default()),
        ..Config::default()
    };
    assert!(verifier_for(&empty_gate).allows_anonymous());

    let gated = Config {
        access: Some(gate()),
        ..Config::default()
    };
    let v = verifier_for(&gated);
    assert!(!v.allows_anonymous());
    assert!(v.verify("encarregado", "turno1"));
    assert!(!v.verify("encarregado", "x"));
}

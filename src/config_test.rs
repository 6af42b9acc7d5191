use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(None), Ok(DEFAULT_BIND_ADDR));
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(matches!(parse_bind_addr(Some("::1")), Ok(IpAddr::V6(_))));
    assert_eq!(
        parse_bind_addr(Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_host_env() };
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr(), SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));

    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4100");

    unsafe {
        std::env::set_var("PORT", "nope");
    }
    assert_eq!(HostConfig::from_env(), Err(ConfigError::InvalidPort("nope".into())));

    unsafe { clear_host_env() };
}

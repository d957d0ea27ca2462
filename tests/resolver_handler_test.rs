use sigma_handlers::config::ResolverConfig;
use sigma_handlers::core::AddressFamily;
use sigma_handlers::{HandlerError, Invoker, Payload, ResolverHandler};
use std::error::Error as _;
use std::net::IpAddr;

#[tokio::test]
async fn test_resolve_ip_literal() -> anyhow::Result<()> {
    let invoker = Invoker::new(ResolverHandler::from_config(&ResolverConfig::default()));

    let invocation = invoker.invoke(Payload::from("192.0.2.1")).await?;

    assert_eq!(invocation.handler, "resolver");
    assert_eq!(invocation.result, "192.0.2.1");
    Ok(())
}

#[tokio::test]
async fn test_resolve_localhost() {
    let invoker = Invoker::new(ResolverHandler::from_config(&ResolverConfig::default()));

    let address = invoker.call(Payload::from("localhost")).await.unwrap();
    let ip: IpAddr = address.parse().expect("resolver should return a valid address");

    assert!(ip.is_loopback());
}

#[tokio::test]
async fn test_unresolvable_host_keeps_resolver_error() {
    let invoker = Invoker::new(ResolverHandler::from_config(&ResolverConfig::default()));

    let err = invoker
        .call(Payload::from("this.host.does.not.exist.invalid"))
        .await
        .unwrap_err();

    assert!(matches!(err, HandlerError::LookupError { .. }));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("this.host.does.not.exist.invalid"));
}

#[tokio::test]
async fn test_family_mismatch_on_literal() {
    let config = ResolverConfig {
        family: AddressFamily::Ipv6,
    };
    let invoker = Invoker::new(ResolverHandler::from_config(&config));

    let err = invoker.call(Payload::from("192.0.2.1")).await.unwrap_err();
    assert!(matches!(err, HandlerError::NoAddress { .. }));
}

#[tokio::test]
async fn test_invalid_utf8_is_rejected_not_panicked() {
    let invoker = Invoker::new(ResolverHandler::from_config(&ResolverConfig::default()));

    let err = invoker
        .call(Payload::new(vec![b'a', 0xff, b'.', b'c', b'o', b'm']))
        .await
        .unwrap_err();

    assert!(matches!(err, HandlerError::InvalidPayload(_)));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_resolve_example_com() {
    let invoker = Invoker::new(ResolverHandler::from_config(&ResolverConfig::default()));

    let address = invoker.call(Payload::from("example.com")).await.unwrap();
    assert!(!address.is_empty());
    assert!(address.parse::<IpAddr>().is_ok());
}

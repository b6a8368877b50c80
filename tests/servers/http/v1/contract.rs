use std::net::IpAddr;
use std::str::FromStr;

use clientip::servers::http::v1::handlers::client_ip::Report;
use clientip::servers::http::v1::handlers::health_check;
use clientip_test_helpers::configuration;

use crate::servers::http::client::Client;
use crate::servers::http::environment::Environment;

fn report(client_ip: &str, source: &str) -> Report {
    Report {
        client_ip: Some(IpAddr::from_str(client_ip).unwrap()),
        source: Some(source.to_string()),
    }
}

#[tokio::test]
async fn health_check_endpoint_should_return_status_ok() {
    let env = Environment::start(&configuration::ephemeral()).await;

    let response = Client::new(env.bind_address).health_check().await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.json::<health_check::Report>().await.unwrap(),
        health_check::Report {
            status: health_check::Status::Ok
        }
    );

    env.stop().await;
}

mod receiving_a_client_ip_request {
    use clientip::servers::http::v1::handlers::client_ip::Report;
    use clientip_test_helpers::configuration;

    use super::report;
    use crate::servers::http::client::Client;
    use crate::servers::http::environment::Environment;

    #[tokio::test]
    async fn should_return_the_connection_info_ip_when_there_are_no_proxy_headers() {
        let env = Environment::start(&configuration::ephemeral()).await;

        let response = Client::new(env.bind_address).client_ip(&[]).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.json::<Report>().await.unwrap(),
            report("127.0.0.1", "connection-info")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_the_left_most_valid_ip_in_the_x_forwarded_for_header() {
        let env = Environment::start(&configuration::ephemeral()).await;

        let response = Client::new(env.bind_address)
            .client_ip(&[("X-Forwarded-For", "unknown, 203.0.113.5:4532, 10.0.0.1")])
            .await;

        assert_eq!(
            response.json::<Report>().await.unwrap(),
            report("203.0.113.5", "x-forwarded-for")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn should_prefer_the_x_forwarded_for_header_over_the_alternative_headers() {
        let env = Environment::start(&configuration::ephemeral()).await;

        let response = Client::new(env.bind_address)
            .client_ip(&[("X-Real-IP", "198.51.100.1"), ("X-Forwarded-For", "203.0.113.5")])
            .await;

        assert_eq!(
            response.json::<Report>().await.unwrap(),
            report("203.0.113.5", "x-forwarded-for")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn should_return_the_ip_in_the_first_valid_alternative_header() {
        let env = Environment::start(&configuration::ephemeral()).await;

        let response = Client::new(env.bind_address)
            .client_ip(&[
                ("X-Forwarded-For", "unknown, unknown"),
                ("X-Client-IP", "not-an-ip"),
                ("True-Client-IP", "2001:db8::5"),
                ("X-Real-IP", "198.51.100.1"),
            ])
            .await;

        assert_eq!(
            response.json::<Report>().await.unwrap(),
            report("2001:db8::5", "true-client-ip")
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn should_fall_back_to_the_connection_info_ip_when_no_header_is_valid() {
        let env = Environment::start(&configuration::ephemeral()).await;

        let response = Client::new(env.bind_address)
            .client_ip(&[("X-Forwarded-For", "unknown, unknown"), ("X-Real-IP", "198.51.100.1:8080")])
            .await;

        assert_eq!(
            response.json::<Report>().await.unwrap(),
            report("127.0.0.1", "connection-info")
        );

        env.stop().await;
    }
}

//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, PurchaseArgs};
use crate::purchase::PurchaseEvent;

mod parsing {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_tweet_command() {
        let cli = Cli::parse_from_iter(["tweet-notify", "tweet", "Hello world"]);

        match cli.command {
            Command::Tweet { text } => assert_eq!(text, "Hello world"),
            other => panic!("Expected tweet command, got {other:?}"),
        }
    }

    #[test]
    fn parse_global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "tweet-notify",
            "tweet",
            "hi",
            "--url",
            "https://api.example.com/post-tweet",
            "--api-key",
            "secret",
            "--timeout",
            "30",
            "-v",
        ]);

        assert_eq!(
            cli.url.as_deref(),
            Some("https://api.example.com/post-tweet")
        );
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["tweet-notify", "-c", "notify.toml", "tweet", "x"]);

        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("notify.toml"))
        );
    }

    #[test]
    fn parse_webhook_command() {
        let cli = Cli::parse_from_iter(["tweet-notify", "webhook", "payload.json"]);

        match cli.command {
            Command::Webhook { payload } => {
                assert_eq!(payload, std::path::PathBuf::from("payload.json"));
            }
            other => panic!("Expected webhook command, got {other:?}"),
        }
    }

    #[test]
    fn tweet_requires_text() {
        assert!(Cli::try_parse_from(["tweet-notify", "tweet"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["tweet-notify"]).is_err());
    }
}

mod purchase_command {
    use super::*;

    fn purchase_args(args: &[&str]) -> PurchaseArgs {
        let mut full = vec!["tweet-notify", "purchase"];
        full.extend(args);
        match Cli::parse_from_iter(full).command {
            Command::Purchase(args) => args,
            other => panic!("Expected purchase command, got {other:?}"),
        }
    }

    #[test]
    fn all_fields() {
        let args = purchase_args(&[
            "--customer",
            "John Doe",
            "--product",
            "Land at 2 Seasons",
            "--amount",
            "500000",
            "--currency",
            "USD",
            "--location",
            "Abeokuta",
        ]);

        assert_eq!(args.customer.as_deref(), Some("John Doe"));
        assert_eq!(args.product.as_deref(), Some("Land at 2 Seasons"));
        assert!((args.amount - 500_000.0).abs() < f64::EPSILON);
        assert_eq!(args.currency, "USD");
        assert_eq!(args.location.as_deref(), Some("Abeokuta"));
    }

    #[test]
    fn currency_defaults_to_naira() {
        let args = purchase_args(&["--amount", "10"]);

        assert_eq!(args.currency, "NGN");
        assert!(args.customer.is_none());
    }

    #[test]
    fn converts_into_event() {
        let args = purchase_args(&["--amount", "2500.5", "--product", "Plot"]);

        let event = PurchaseEvent::from(&args);

        assert_eq!(event.product(), "Plot");
        assert_eq!(event.user_name(), "A customer");
        assert_eq!(event.formatted_amount(), "₦2,500.5");
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["tweet-notify", "init"]);

        match cli.command {
            Command::Init { output } => {
                assert_eq!(output, std::path::PathBuf::from("tweet-notify.toml"));
            }
            other => panic!("Expected init command, got {other:?}"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["tweet-notify", "init", "-o", "custom.toml"]);

        match cli.command {
            Command::Init { output } => {
                assert_eq!(output, std::path::PathBuf::from("custom.toml"));
            }
            other => panic!("Expected init command, got {other:?}"),
        }
    }
}

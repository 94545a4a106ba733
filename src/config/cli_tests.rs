//! Tests for CLI argument parsing.

use super::cli::Cli;

mod parsing {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::parse_from_iter(["nif"]);

        assert!(!cli.all);
        assert!(!cli.one);
        assert!(!cli.ipv4);
        assert!(!cli.ipv6);
        assert!(!cli.only_ip);
        assert_eq!(cli.retry, 0);
        assert!(!cli.debug);
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::parse_from_iter([
            "nif", "--all", "--ipv4", "--ipv6", "--only-ip", "--retry", "5", "--debug",
        ]);

        assert!(cli.all);
        assert!(cli.ipv4);
        assert!(cli.ipv6);
        assert!(cli.only_ip);
        assert_eq!(cli.retry, 5);
        assert!(cli.debug);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["nif", "-1", "-4", "-6", "-i", "-r", "3", "-d"]);

        assert!(cli.one);
        assert!(cli.ipv4);
        assert!(cli.ipv6);
        assert!(cli.only_ip);
        assert_eq!(cli.retry, 3);
        assert!(cli.debug);
    }

    #[test]
    fn parse_combined_short_flags() {
        let cli = Cli::parse_from_iter(["nif", "-14i"]);

        assert!(cli.one);
        assert!(cli.ipv4);
        assert!(cli.only_ip);
    }

    #[test]
    fn one_has_o_alias() {
        let cli = Cli::parse_from_iter(["nif", "-o"]);
        assert!(cli.one);

        let cli = Cli::parse_from_iter(["nif", "--one"]);
        assert!(cli.one);
    }

    #[test]
    fn all_short_flag() {
        let cli = Cli::parse_from_iter(["nif", "-a"]);
        assert!(cli.all);
    }
}

mod errors {
    use super::*;

    #[test]
    fn negative_retry_is_rejected() {
        assert!(Cli::try_parse_from_iter(["nif", "--retry", "-1"]).is_err());
    }

    #[test]
    fn non_numeric_retry_is_rejected() {
        assert!(Cli::try_parse_from_iter(["nif", "-r", "many"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from_iter(["nif", "--bogus"]).is_err());
    }

    #[test]
    fn conflicting_flags_parse_and_fail_later() {
        // Conflicts are reported by QueryOptions, not by clap
        let cli = Cli::try_parse_from_iter(["nif", "--one", "--all"]).unwrap();
        assert!(cli.one && cli.all);
    }
}

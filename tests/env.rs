//! Environment overrides. Kept to one test so nothing else in this binary
//! reads the variables while they are set.

use passgen::cli::Context;
use passgen::entropy::Source;

fn context(args: &[&str]) -> Context {
    Context::from_args(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
}

#[test]
fn environment_feeds_widget_and_cli() {
    unsafe {
        std::env::set_var("PASSGEN_LENGTH", "16");
        std::env::set_var("PASSGEN_URANDOM", "1");
    }

    let bare = context(&[]).settings;
    assert!(bare.interactive);
    assert_eq!(bare.config.length, 16);
    assert_eq!(bare.source, Source::Os);

    let flagged = context(&["-q", "-l", "8"]).settings;
    assert!(!flagged.interactive);
    assert_eq!(flagged.config.length, 8);
    assert_eq!(flagged.source, Source::Os);

    for falsey in ["0", "false", "no", "off", ""] {
        unsafe { std::env::set_var("PASSGEN_URANDOM", falsey) };
        assert_eq!(context(&["-q"]).settings.source, Source::Thread);
    }

    unsafe {
        std::env::remove_var("PASSGEN_LENGTH");
        std::env::remove_var("PASSGEN_URANDOM");
    }
    assert_eq!(context(&[]).settings.config.length, 12);
}

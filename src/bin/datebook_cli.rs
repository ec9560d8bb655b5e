use datebook::cli::{
    output::{MessageKind, Styler},
    run_cli, strings,
};
use datebook::utils::build_info;

fn main() {
    if std::env::args().skip(1).any(|arg| arg == "--version") {
        println!("{}", build_info::current().summary());
        return;
    }

    if let Err(err) = run_cli() {
        tracing::error!(error = %err, "task aborted");
        let styler = Styler::new(std::env::var_os("NO_COLOR").is_none());
        eprintln!(
            "{}",
            styler.paint(MessageKind::Error, format!("{} {err}", strings::ERROR_PREFIX))
        );
        std::process::exit(1);
    }
}

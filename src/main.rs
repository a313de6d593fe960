use clap::Parser;
use std::io::{self, IsTerminal};
use zerotrace::app::{self, RunOptions};
use zerotrace::console;
use zerotrace::i18n::Locale;
use zerotrace::logging;
use zerotrace::lookup::IpLookup;

/// ZeroTrace Lookup: where is this IP?
///
/// Private addresses (10/8, 172.16/12, 192.168/16) are reverse-resolved
/// locally. Anything else is looked up on ip-api.com and ipinfo.io.
///
/// Examples:
///   zerotrace
///   zerotrace 8.8.8.8
///   zerotrace 192.168.1.1 --lang en
///   zerotrace 2606:4700::1111 --details -v
#[derive(Parser)]
#[command(name = "zerotrace", version, about, long_about = None)]
struct Cli {
    /// Address to look up. Prompts for one when omitted.
    #[arg(index = 1)]
    address: Option<String>,

    /// Output language.
    #[arg(long, value_enum, default_value = "fr")]
    lang: Locale,

    /// Also show ISP, organization, AS and the echoed address.
    #[arg(long)]
    details: bool,

    /// Exit right away instead of waiting for Enter.
    #[arg(long)]
    no_pause: bool,

    /// Log to stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    let pause = cli.address.is_none() && !cli.no_pause && stdin.is_terminal();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let options = RunOptions {
        address: cli.address.clone(),
        locale: cli.lang,
        details: cli.details,
    };
    let code = app::run(&options, &IpLookup::new(), &mut input, &mut out).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        1
    });

    if pause {
        let _ = console::pause(cli.lang.messages(), &mut input, &mut out);
    }
    std::process::exit(code);
}

use clap::Parser;
use crossterm::style::{Color, Stylize, style};
use itertools::Itertools;

use acclex::{Acceptor, Spec, acc, all, class_names, ends_before, ends_with, scan, skip, truncate};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to feed to the acceptor. Without any acceptor flags the demo
    /// runs `EndsBefore('m', All())`
    #[arg(value_name = "TEXT", default_value = "This is a demo.")]
    text: String,

    /// Reject at this delimiter
    #[arg(short = 'b', long, value_name = "CHAR", conflicts_with = "ends_with")]
    ends_before: Option<char>,

    /// Accept up to and including this delimiter
    #[arg(short = 'w', long, value_name = "CHAR")]
    ends_with: Option<char>,

    /// Accept members of a named character class
    #[arg(short = 'c', long, value_name = "NAME", conflicts_with = "chars")]
    class: Option<String>,

    /// Accept any of these characters
    #[arg(short = 's', long, value_name = "SET")]
    chars: Option<String>,

    /// Accept at most this many characters
    #[arg(short = 'm', long, value_name = "N")]
    max: Option<usize>,

    /// Accept this many leading characters unconditionally
    #[arg(short = 'k', long, value_name = "N")]
    skip: Option<usize>,

    /// List the built-in character classes and exit
    #[arg(short = 'l', long)]
    list_classes: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// An acceptor together with a readable rendering of how it was built.
struct Built {
    acceptor: Acceptor,
    source: String,
}

/// True when no flag shapes the acceptor, in which case the demo runs
/// `EndsBefore('m', All())`.
fn is_default_demo(args: &Args) -> bool {
    args.class.is_none()
        && args.chars.is_none()
        && args.max.is_none()
        && args.skip.is_none()
        && args.ends_before.is_none()
        && args.ends_with.is_none()
}

fn build(args: &Args) -> anyhow::Result<Built> {
    let (mut acceptor, mut source) = match (&args.class, &args.chars) {
        (Some(name), _) => (acc(Spec::Named(name.clone()))?, format!("Acc({name:?})")),
        (None, Some(set)) => (acc(set.as_str())?, format!("Acc({set:?})")),
        (None, None) => (all(), "All()".to_string()),
    };
    if let Some(max) = args.max {
        acceptor = truncate(max, acceptor);
        source = format!("Truncate({max}, {source})");
    }
    if let Some(delim) = args.ends_before {
        acceptor = ends_before(delim, acceptor);
        source = format!("EndsBefore({delim:?}, {source})");
    } else if let Some(delim) = args.ends_with {
        acceptor = ends_with(delim, acceptor);
        source = format!("EndsWith({delim:?}, {source})");
    } else if is_default_demo(args) {
        acceptor = ends_before('m', acceptor);
        source = format!("EndsBefore('m', {source})");
    }
    if let Some(n) = args.skip {
        acceptor = skip(n, acceptor);
        source = format!("Skip({n}, {source})");
    }
    Ok(Built { acceptor, source })
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_classes {
        println!("{}", class_names().sorted().join("\n"));
        return Ok(());
    }

    let color = !args.no_color;
    let Built {
        mut acceptor,
        source,
    } = build(&args)?;
    let text = args.text.as_str();

    println!();
    println!("Acceptor: \"{source}\"\n");
    println!("Source:   \"{text}\"\n");

    let scanned = scan(&mut acceptor, text)?;
    for (offset, ch) in scanned.accepted_prefix().char_indices() {
        println!("{} {ch:?} at {offset} ...", paint("Accepted", Color::Green, color));
    }
    if let Some(rejection) = scanned.rejected {
        println!("--------");
        println!(
            "{} {:?} at {} ...\n",
            paint("Rejected", Color::Red, color),
            rejection.ch,
            rejection.offset
        );
        println!("Consumed:  \"{}\"\n", scanned.consumed());
        println!("Remaining: \"{}\"\n", scanned.remaining());
    }

    println!("Program complete.\n");
    Ok(())
}

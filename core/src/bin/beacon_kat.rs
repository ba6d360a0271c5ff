use anyhow::{Context, Result};
use beacon_extender_core::kat::{self, KAT_HASHES};
use beacon_extender_core::{lookup, HashDescriptor, HASH_REGISTRY};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

fn cli() -> Command {
    Command::new("beacon-kat")
        .about("Expand randomness beacons and print known-answer vectors")
        .subcommand_required(true)
        .subcommand(
            Command::new("kats")
                .about("Print the reference vectors as a plain hex listing")
                .arg(
                    Arg::new("hash")
                        .long("hash")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Hash to print vectors for (repeatable)"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("hash")
                        .help("Print vectors for every registered hash"),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand a single beacon")
                .arg(Arg::new("hash").long("hash").value_name("NAME").required(true))
                .arg(
                    Arg::new("beacon")
                        .long("beacon")
                        .value_name("HEX")
                        .required(true),
                )
                .arg(Arg::new("dst").long("dst").value_name("STR").required(true))
                .arg(
                    Arg::new("len")
                        .long("len")
                        .value_name("N")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("list").about("List registered hashes"))
}

fn print_kats(hash: &HashDescriptor) -> Result<()> {
    let vectors = kat::vectors(hash).with_context(|| format!("expanding vectors for {}", hash.name()))?;
    let dst = hash.suite_dst(kat::KAT_DST_PREFIX);

    println!("-----------------------------------------------------------");
    println!("{}", hash.name());
    println!("DST = {}", String::from_utf8_lossy(&dst));
    println!("hash = {}", hash.name());
    println!();
    for v in &vectors {
        println!("{v}");
    }
    Ok(())
}

fn run_kats(m: &ArgMatches) -> Result<()> {
    let selected: Vec<&HashDescriptor> = if m.get_flag("all") {
        HASH_REGISTRY.iter().collect()
    } else {
        let names: Vec<String> = match m.get_many::<String>("hash") {
            Some(names) => names.cloned().collect(),
            None => KAT_HASHES.iter().map(|s| s.to_string()).collect(),
        };
        names
            .iter()
            .map(|n| lookup(n).map_err(anyhow::Error::from))
            .collect::<Result<_>>()?
    };

    for hash in selected {
        print_kats(hash)?;
    }
    Ok(())
}

fn run_expand(m: &ArgMatches) -> Result<()> {
    let name = m.get_one::<String>("hash").context("missing --hash")?;
    let beacon_hex = m.get_one::<String>("beacon").context("missing --beacon")?;
    let dst = m.get_one::<String>("dst").context("missing --dst")?;
    let len = *m.get_one::<usize>("len").context("missing --len")?;

    let beacon = hex::decode(beacon_hex).context("beacon is not valid hex")?;
    let hash = lookup(name)?;
    let out = hash.expand(&beacon, dst.as_bytes(), len)?;
    println!("{}", hex::encode(out));
    Ok(())
}

fn run_list() {
    for hash in HASH_REGISTRY.iter() {
        let size = match hash.digest_size() {
            Some(n) => n.to_string(),
            None => "variable".to_string(),
        };
        println!("{:<12} {:<11} {}", hash.name(), hash.algorithm().to_string(), size);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli().get_matches().subcommand() {
        Some(("kats", m)) => run_kats(m),
        Some(("expand", m)) => run_expand(m),
        Some(("list", _)) => {
            run_list();
            Ok(())
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

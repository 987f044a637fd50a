use fpbits::command_line::*;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = clap::Command::new("fpbits")
        .about("Molecule fingerprints as text bitstrings")
        .subcommand_required(true)
        .subcommand(make_bits::command())
        .subcommand(make_rdkit_bits::command())
        .subcommand(count_bits::command())
        .subcommand(merge_bits::command())
        .subcommand(subset_bits::command())
        .subcommand(reverse_bits::command())
        .subcommand(histogram::command());

    let matches = app.get_matches();

    match matches.subcommand() {
        Some((make_bits::NAME, matches)) => make_bits::action(matches),
        Some((make_rdkit_bits::NAME, matches)) => make_rdkit_bits::action(matches),
        Some((count_bits::NAME, matches)) => count_bits::action(matches),
        Some((merge_bits::NAME, matches)) => merge_bits::action(matches),
        Some((subset_bits::NAME, matches)) => subset_bits::action(matches),
        Some((reverse_bits::NAME, matches)) => reverse_bits::action(matches),
        Some((histogram::NAME, matches)) => histogram::action(matches),
        Some((other, _matches)) => Err(eyre::eyre!("can't handle {}", other)),
        None => Err(eyre::eyre!("no subcommand given")),
    }
}

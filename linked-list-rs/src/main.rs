use anyhow::{ensure, Context, Result};
use clap::Parser;
use linked_list_rs::List;
use log::{debug, info};
use std::io::Write;

/// Builds, prints, reverses and tears down lists, checking each step.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Length of the list that is printed and reversed
    #[arg(long, default_value_t = 100)]
    size: u64,
    /// Length of the list used to probe for stack exhaustion
    #[arg(long, default_value_t = 1_000_000)]
    large: u64,
    /// Do not print the lists
    #[arg(short, long)]
    quiet: bool,
}

fn init_log() {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "linked_list_rs=info"))
        .init();
}

fn print(out: &mut impl Write, quiet: bool, title: &str, list: &List) -> Result<()> {
    if !quiet {
        writeln!(out, "{title}")?;
        list.display(out)?;
    }
    Ok(())
}

fn check_sequence(
    list: &List,
    expected: impl Iterator<Item = u64>,
    expected_len: usize,
) -> Result<()> {
    let mut len = 0usize;
    for (idx, (got, want)) in list.iter().zip(expected).enumerate() {
        ensure!(*got == want, "element {idx} is {got}, expected {want}");
        len += 1;
    }
    ensure!(
        len == expected_len && list.len() == expected_len,
        "list has {} elements, expected {expected_len}",
        list.len()
    );
    Ok(())
}

fn hand_built(out: &mut impl Write, quiet: bool) -> Result<()> {
    let mut list = List::new();
    list.push(2);
    list.push(1);
    list.push(0);
    print(out, quiet, "Hand-built list:", &list)?;
    ensure!(list.to_string() == "0 -> 1 -> 2 -> NULL", "unexpected rendering {list}");
    Ok(())
}

fn small(out: &mut impl Write, cli: &Cli) -> Result<()> {
    let values: Vec<u64> = (0..cli.size).collect();
    let mut list = List::try_from_slice(&values).context("building the list")?;
    let size = values.len();
    check_sequence(&list, 0..cli.size, size)?;
    print(out, cli.quiet, "Created list:", &list)?;

    let head = list.peek().map(|v| v as *const u64);
    list.reverse();
    debug!(
        "head before reversal {:?}, after {:?}",
        head,
        list.peek().map(|v| v as *const u64)
    );
    ensure!(cli.size == 0 || !list.is_empty(), "reversal lost the list");
    print(out, cli.quiet, "Reversed list:", &list)?;
    check_sequence(&list, (0..cli.size).rev(), size)?;

    list.reverse();
    check_sequence(&list, 0..cli.size, size)?;
    list.destroy();
    Ok(())
}

fn large(cli: &Cli) -> Result<()> {
    let values: Vec<u64> = (0..cli.large).collect();
    let mut list = List::try_from_slice(&values).context("building the large list")?;
    list.reverse();
    ensure!(
        list.peek().copied() == cli.large.checked_sub(1),
        "large list head is {:?} after reversal",
        list.peek()
    );
    list.destroy();
    info!("built, reversed and destroyed {} nodes", cli.large);
    Ok(())
}

fn main() -> Result<()> {
    init_log();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    hand_built(&mut out, cli.quiet)?;
    small(&mut out, &cli)?;
    large(&cli)?;
    info!("all checks passed");
    Ok(())
}

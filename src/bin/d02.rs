use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d02.txt");
    let (safe, tolerated) = solve(input.as_str())?;

    cli::answer(2, 1, safe);
    cli::answer(2, 2, tolerated);
    Ok(())
}

fn solve(input: &str) -> Result<(u32, u32)> {
    let mut safe = 0;
    let mut tolerated = 0;

    for line in input.lines().filter(|line| !line.is_empty()) {
        let report = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<i64>, _>>()?;

        if is_safe(&report) {
            safe += 1;
            tolerated += 1;
        } else if (0..report.len()).any(|skip| is_safe_without(&report, skip)) {
            tolerated += 1;
        }
    }

    Ok((safe, tolerated))
}

/// A report is safe when its levels are strictly monotonic with adjacent
/// differences between one and three.
fn is_safe(report: &[i64]) -> bool {
    let mut deltas = report.windows(2).map(|w| w[1] - w[0]);
    deltas.clone().all(|d| (1..=3).contains(&d)) || deltas.all(|d| (-3..=-1).contains(&d))
}

fn is_safe_without(report: &[i64], skip: usize) -> bool {
    let report = report
        .iter()
        .enumerate()
        .filter(|&(at, _)| at != skip)
        .map(|(_, &level)| level)
        .collect::<Vec<_>>();

    is_safe(&report)
}

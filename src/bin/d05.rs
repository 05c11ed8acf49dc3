use core::cmp::Ordering;

use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d05.txt");
    let (o1, o2) = solve(input.as_str())?;

    cli::answer(5, 1, o1);
    cli::answer(5, 2, o2);
    Ok(())
}

fn solve(input: &str) -> Result<(u64, u64)> {
    let (rules, updates) = input
        .split_once("\n\n")
        .context("missing blank line between rules and updates")?;

    let rules = rules
        .lines()
        .map(|line| {
            let (first, second) = line
                .split_once('|')
                .with_context(|| anyhow!("bad ordering rule: {line:?}"))?;
            Ok((first.parse::<u64>()?, second.parse::<u64>()?))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut o1 = 0;
    let mut o2 = 0;

    for line in updates.lines().filter(|line| !line.is_empty()) {
        let mut pages = line
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()?;

        ensure!(!pages.is_empty(), "empty update: {line:?}");

        if in_order(&pages, &rules) {
            o1 += middle(&pages);
        } else {
            sort_by_rules(&mut pages, &rules);
            o2 += middle(&pages);
        }
    }

    Ok((o1, o2))
}

/// Test that no rule with both pages present is violated.
fn in_order(pages: &[u64], rules: &[(u64, u64)]) -> bool {
    rules.iter().all(|&(first, second)| {
        let Some(a) = pages.iter().position(|&page| page == first) else {
            return true;
        };

        let Some(b) = pages.iter().position(|&page| page == second) else {
            return true;
        };

        a < b
    })
}

fn sort_by_rules(pages: &mut [u64], rules: &[(u64, u64)]) {
    pages.sort_by(|&a, &b| {
        if rules.contains(&(a, b)) {
            Ordering::Less
        } else if rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

fn middle(pages: &[u64]) -> u64 {
    pages[pages.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::solve;

    const INPUT: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(solve(INPUT).unwrap(), (143, 123));
    }
}

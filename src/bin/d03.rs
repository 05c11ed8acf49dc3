use lib::prelude::*;
use regex::Regex;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d03.txt");
    let (o1, o2) = solve(input.as_str())?;

    cli::answer(3, 1, o1);
    cli::answer(3, 2, o2);
    Ok(())
}

fn solve(input: &str) -> Result<(u64, u64)> {
    let pattern = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;

    let mut enabled = true;
    let mut o1 = 0;
    let mut o2 = 0;

    for capture in pattern.captures_iter(input) {
        match &capture[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ => {
                let product = capture[1].parse::<u64>()? * capture[2].parse::<u64>()?;
                o1 += product;

                if enabled {
                    o2 += product;
                }
            }
        }
    }

    Ok((o1, o2))
}

#[cfg(test)]
mod tests {
    use super::solve;

    #[test]
    fn example_part_one() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let (o1, _) = solve(input).unwrap();
        assert_eq!(o1, 161);
    }

    #[test]
    fn example_part_two() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        let (_, o2) = solve(input).unwrap();
        assert_eq!(o2, 48);
    }
}

use lib::prelude::*;
use lib::wordsearch;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d04.txt");
    let mut grid = input.grid()?;

    cli::answer(4, 1, wordsearch::count_word(&grid, b"XMAS")?);
    cli::answer(4, 2, wordsearch::count_crossings(&mut grid, b"MAS")?);
    Ok(())
}

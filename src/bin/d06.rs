use lib::patrol::Patrol;
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;

    if opts.version {
        println!("{}", lib::version!());
        return Ok(());
    }

    let input = lib::input!("d06.txt");
    let mut patrol = Patrol::new(input.grid()?)?;

    if !patrol.traverse()? {
        bail!("guard never leaves the map");
    }

    debug!("final map:\n{patrol}");
    cli::answer(6, 1, patrol.count_unique_visited());

    let obstacles = lib::timeit!(patrol.find_loop_inducing_obstacles()?);
    cli::answer(6, 2, obstacles);
    Ok(())
}

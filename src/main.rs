use anyhow::Result;

fn main() -> Result<()> {
    pagesort::logging::init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = std::io::stdout();
    pagesort::cli::run(&args, &mut stdout)
}

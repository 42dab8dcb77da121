use std::env;

use resume_parser::{parse_resume, server, Settings};

fn print_usage() {
    eprintln!("Usage: resume-parser <url>     parse one resume and print JSON");
    eprintln!("       resume-parser --serve   run the HTTP service");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--serve") => {
            let settings = Settings::load()?;
            server::serve(settings).await?;
        }
        Some("--help" | "-h") => print_usage(),
        Some(url) => {
            let parsed = parse_resume(url).await?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        None => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

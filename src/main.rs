use clap::Parser;
use quickcopy::{
    article_markdown, copy_to_clipboard, read_body_file, read_stdin, title_and_url, Article,
    QuickCopyError,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Copy a page's title/URL or its content as Markdown to the clipboard
///
/// Without a body file, copies "{title}\n{url}" as plain text. With a body
/// file (or '-' for stdin), treats its text as the page's extracted content
/// and copies a Markdown document with a heading and source attribution.
#[derive(Parser, Debug)]
#[command(name = "quickcopy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Article body text file ('-' for stdin)
    body: Option<PathBuf>,

    /// Page title
    #[arg(short, long)]
    title: String,

    /// Page URL, used for the source attribution link
    #[arg(short, long)]
    url: String,

    /// Site name for the attribution line (defaults to the URL's domain)
    #[arg(short, long)]
    site: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Best-effort domain extraction from a URL, standing in for what the page's
/// document would report.
fn domain_of(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.split(':').next().unwrap_or(host).to_string()
}

fn run(args: Args) -> Result<(), QuickCopyError> {
    let text = match &args.body {
        Some(path) => {
            let body = if path.to_string_lossy() == "-" {
                if args.verbose {
                    eprintln!("Reading body from stdin...");
                }
                read_stdin()?
            } else {
                if args.verbose {
                    eprintln!("Reading body file: {}", path.display());
                }
                read_body_file(path)?
            };
            let article = Article {
                title: args.title.clone(),
                site_name: args.site.clone(),
                text_content: body,
            };
            article_markdown(&article, &args.url, &domain_of(&args.url))
        }
        None => title_and_url(&args.title, &args.url),
    };

    let len = text.len();
    copy_to_clipboard(&text)?;

    if !args.quiet {
        if args.body.is_some() {
            eprintln!("Copied {} bytes of Markdown to clipboard", len);
        } else {
            eprintln!("Copied {} bytes (title and URL) to clipboard", len);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

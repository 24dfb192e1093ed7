use anyhow::Context as _;
use clap::Parser as _;
use shipping_mcp::config::Args;
use std::io::Write as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    shipping_mcp::logging::init(&args.log_level, args.log_format)?;

    let source = shipping_mcp::build_source(&args).context("invalid configuration")?;

    if args.list_tools {
        let tools = serde_json::to_value(source.list_tools())?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", serde_json::to_string_pretty(&tools)?)?;
        stdout.flush()?;
        return Ok(());
    }

    shipping_mcp::serve_stdio(source)
        .await
        .context("MCP stdio server failed")?;
    Ok(())
}

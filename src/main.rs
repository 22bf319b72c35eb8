use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use thoughtspace::canvas::{BlockContent, Canvas, SubmitOutcome};
use thoughtspace::logging::{self, LogTarget};
use thoughtspace::{classify, Agent, Config, MockSources};

#[derive(Parser)]
#[command(name = "thoughtspace")]
#[command(about = "A prompt-driven canvas of social, video, web and AI content blocks")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/thoughtspace/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate content for one prompt and print the resulting blocks
    Ask {
        prompt: String,

        /// Print the aggregate result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which sources a prompt would query
    Classify { prompt: String },
    /// Call a single tool by name, e.g. `web.search`
    Tool {
        name: String,

        /// Tool parameters as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },
    /// Print the default configuration
    DefaultConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let target = if cli.command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(&config.logging, target)?;

    // One agent for the whole process, handed to whichever front end runs.
    let agent = Agent::new(Arc::new(MockSources::new(config.sources.clone())));

    match cli.command {
        None => thoughtspace::ui::run(agent, Canvas::new(config.canvas.clone())).await?,
        Some(Commands::Ask { prompt, json }) => ask(&agent, &config, &prompt, json).await?,
        Some(Commands::Classify { prompt }) => {
            let selection = classify(&prompt);
            println!("twitter:  {}", selection.needs_twitter);
            println!("youtube:  {}", selection.needs_youtube);
            println!("web:      {}", selection.needs_web);
            println!("category: {}", selection.category);
        }
        Some(Commands::Tool { name, params }) => {
            let params: serde_json::Value =
                serde_json::from_str(&params).context("--params must be valid JSON")?;
            let value = agent.call_tool(&name, &params).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Some(Commands::DefaultConfig) => print!("{}", Config::default().to_toml()?),
    }

    Ok(())
}

async fn ask(agent: &Agent, config: &Config, prompt: &str, json: bool) -> Result<()> {
    if json {
        let result = agent.generate(prompt).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut canvas = Canvas::new(config.canvas.clone());
    match canvas.submit(agent, prompt).await {
        SubmitOutcome::Ignored => anyhow::bail!("prompt is empty"),
        SubmitOutcome::Failed => anyhow::bail!("content generation failed"),
        SubmitOutcome::Added(_) => {}
    }

    for block in canvas.blocks() {
        println!("[{}]", block.source);
        match &block.content {
            BlockContent::Twitter(tweet) => {
                println!("  @{}: {}", tweet.username, tweet.content);
                println!("  likes {} · retweets {}", tweet.likes, tweet.retweets);
            }
            BlockContent::YouTube(video) => {
                println!("  {} ({})", video.title, video.channel);
                println!("  {} views · {}", video.views, video.duration);
            }
            BlockContent::Web(article) => {
                println!("  {}", article.title);
                println!("  {}", article.url);
            }
            BlockContent::AiResponse(resp) => {
                println!("  {}", resp.summary);
                println!("  confidence {:.0}%", resp.confidence * 100.0);
            }
            BlockContent::Unified(unified) => println!("  {}", unified.summary),
        }
    }

    Ok(())
}

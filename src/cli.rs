use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use giphywall_application::prelude as flows;
use giphywall_core::{
    entities::{Comment, Gif, Id, LoginIdentifier, User},
    gateways::comment::DogeCommentGenerator,
    usecases,
};
use giphywall_db_sqlite::Connections;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "A wall of gifs with machine-made comments")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database tables
    Init,
    /// Add a gif
    Add {
        /// URL or file path
        source: String,
        #[arg(long)]
        caption: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Login name or identifier of the uploader
        #[arg(long, value_name = "LOGIN")]
        by: Option<String>,
    },
    /// List all gifs, newest first
    List {
        #[arg(long, value_name = "LOGIN")]
        by: Option<String>,
    },
    /// Delete a gif
    Delete { id: String },
    /// Add a comment to a gif
    Comment {
        gif_id: String,
        text: String,
        /// The comment has been written by a human
        #[arg(long)]
        human: bool,
    },
    /// Generate a comment for a gif
    Generate { gif_id: String, content: String },
    /// List the comments of a gif
    Comments { gif_id: String },
    /// Manage users
    #[command(subcommand)]
    User(UserCommand),
    /// Sign in with a local account
    Login {
        name: String,
        #[arg(long)]
        display_name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Create a local user
    Create { name: String, display_name: String },
    /// Show the user with the given login identifier
    Show { login_identifier: String },
    /// Find a user by name or email
    Find { query: String },
}

pub fn run(args: Args) -> Result<()> {
    let cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    let db_url = args.db_url.unwrap_or(cfg.db.conn_sqlite);
    log::info!(
        "Connecting to SQLite database '{db_url}' (pool size = {})",
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&db_url, u32::from(cfg.db.conn_pool_size))?;
    giphywall_db_sqlite::initialize(&connections)?;

    match args.command {
        Command::Init => {
            println!("Initialized {db_url}");
        }
        Command::Add {
            source,
            caption,
            tags,
            by,
        } => {
            let uploaded_by = by
                .map(|login| resolve_user(&connections, &login))
                .transpose()?
                .map(|user| user.id);
            let new_gif = usecases::NewGif {
                source,
                caption,
                tags,
                uploaded_by,
            };
            if cfg.comments.auto_comment {
                let (id, comment) =
                    flows::add_gif_with_comment(&connections, &DogeCommentGenerator, new_gif)?;
                println!("{id}");
                if let Some(comment) = comment {
                    print_comment(&comment);
                }
            } else {
                println!("{}", flows::add_gif(&connections, new_gif)?);
            }
        }
        Command::List { by } => {
            let gifs = match by {
                Some(login) => {
                    let user = resolve_user(&connections, &login)?;
                    flows::list_gifs_of_user(&connections, user.id.as_str())?
                }
                None => flows::list_gifs(&connections)?,
            };
            for gif in &gifs {
                print_gif(gif);
            }
        }
        Command::Delete { id } => {
            flows::delete_gif(&connections, &id)?;
        }
        Command::Comment {
            gif_id,
            text,
            human,
        } => {
            let id = flows::add_comment(&connections, Id::from(gif_id), text, !human)?;
            println!("{id}");
        }
        Command::Generate { gif_id, content } => {
            let comment =
                flows::comment_on_gif(&connections, &DogeCommentGenerator, gif_id.into(), &content)?;
            print_comment(&comment);
        }
        Command::Comments { gif_id } => {
            for comment in flows::comments_of_gif(&connections, &gif_id)? {
                print_comment(&comment);
            }
        }
        Command::User(UserCommand::Create { name, display_name }) => {
            let new_user = usecases::NewUser {
                login_identifier: LoginIdentifier::local(&name)?,
                display_name,
                username: Some(name.trim().to_owned()),
                email: None,
            };
            let user = flows::create_user(&connections, new_user)?;
            print_user(&user);
        }
        Command::User(UserCommand::Show { login_identifier }) => {
            match flows::get_user_by_login_identifier(&connections, &login_identifier)? {
                Some(user) => print_user(&user),
                None => println!("No user with login identifier '{login_identifier}'"),
            }
        }
        Command::User(UserCommand::Find { query }) => {
            match flows::find_user(&connections, &query)? {
                Some(user) => print_user(&user),
                None => println!("No user matches '{query}'"),
            }
        }
        Command::Login { name, display_name } => {
            let user = flows::login_local_user(&connections, &name, display_name.as_deref())?;
            print_user(&user);
        }
    }
    Ok(())
}

// Accepts both a plain local name and a full login identifier
fn resolve_user(connections: &Connections, login: &str) -> Result<User> {
    let login_identifier = if login.contains(':') {
        login.parse::<LoginIdentifier>()?
    } else {
        LoginIdentifier::local(login)?
    };
    flows::get_user_by_login_identifier(connections, login_identifier.as_str())?
        .ok_or_else(|| anyhow!("Unknown user '{login_identifier}'"))
}

fn print_gif(gif: &Gif) {
    println!("{}  {}  {}", gif.id, gif.created_at, gif.source);
    if let Some(caption) = &gif.caption {
        println!("    {caption}");
    }
    if !gif.tags.is_empty() {
        println!("    #{}", gif.tags.join(" #"));
    }
    if let Some(embed_url) = gif.embed_url() {
        println!("    {embed_url}");
    }
}

fn print_comment(comment: &Comment) {
    let author = if comment.ai_generated { "bot" } else { "human" };
    println!("{}  [{author}] {}", comment.created_at, comment.text);
}

fn print_user(user: &User) {
    println!(
        "{}  {}  {}",
        user.id, user.login_identifier, user.display_name
    );
    if let Some(last_login_at) = user.last_login_at {
        println!("    last login: {last_login_at}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_add_command() {
        let args = Args::try_parse_from([
            "giphywall",
            "--db-url",
            "gallery.db",
            "add",
            "giphy.com/gifs/cat-ICOgUNjpvO0PC",
            "--caption",
            "Such cat",
            "--tag",
            "cat",
            "--tag",
            "funny",
        ])
        .unwrap();
        assert_eq!(Some("gallery.db"), args.db_url.as_deref());
        let Command::Add {
            source,
            caption,
            tags,
            by,
        } = args.command
        else {
            panic!("unexpected command");
        };
        assert_eq!("giphy.com/gifs/cat-ICOgUNjpvO0PC", source);
        assert_eq!(Some("Such cat"), caption.as_deref());
        assert_eq!(vec!["cat", "funny"], tags);
        assert!(by.is_none());
    }

    #[test]
    fn parse_user_subcommand() {
        let args = Args::try_parse_from(["giphywall", "user", "create", "alice", "Alice"]).unwrap();
        assert!(matches!(
            args.command,
            Command::User(UserCommand::Create { ref name, ref display_name })
                if name == "alice" && display_name == "Alice"
        ));
    }

    #[test]
    fn missing_command() {
        assert!(Args::try_parse_from(["giphywall"]).is_err());
    }
}

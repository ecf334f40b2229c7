//! skillctl - CLI client for the skill-router server.
//!
//! Wraps the skills/plugins HTTP API: list, enable, disable, delete, upload,
//! install-from-URL, and the display-language preference.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use clap::{Parser, Subcommand};
use skill_core::locale::{Locale, LocaleStore};
use skill_core::messages::Messages;
use skillctl::client::{Client, ClientError};
use skillctl::render;
use std::path::{Path, PathBuf};

/// CLI client for the skill-router server.
#[derive(Parser)]
#[command(name = "skillctl")]
#[command(about = "Manage skills and plugins on a skill-router server")]
#[command(version)]
struct Cli {
    /// Server address (default: http://127.0.0.1:9527)
    #[arg(long, global = true, env = "SKILL_ROUTER_ADDR")]
    addr: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all skills
    List,

    /// Enable a skill by file name
    Enable {
        /// Skill file name (e.g. commit-helper.md)
        file_name: String,
    },

    /// Disable a skill by file name
    Disable {
        /// Skill file name (e.g. commit-helper.md)
        file_name: String,
    },

    /// Delete a skill by file name
    Delete {
        /// Skill file name (e.g. commit-helper.md)
        file_name: String,

        /// The skill is currently disabled (deletes from the disabled registry)
        #[arg(long)]
        disabled: bool,
    },

    /// Upload a skill file to the server
    Upload {
        /// Path to the skill file
        path: PathBuf,

        /// Replace an existing skill with the same file name
        #[arg(long)]
        overwrite: bool,
    },

    /// Install skills from a repository URL
    Install {
        /// Repository URL containing skill files
        url: String,
    },

    /// Manage plugins and plugin-owned skills
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },

    /// Show or change the display language
    Locale {
        /// New locale (en or zh); omit to show the current one
        #[arg(value_parser = parse_locale)]
        locale: Option<Locale>,
    },
}

#[derive(Subcommand)]
enum PluginCommand {
    /// Enable a plugin as a unit
    Enable {
        /// Plugin name
        plugin_name: String,
    },

    /// Disable a plugin as a unit
    Disable {
        /// Plugin name
        plugin_name: String,
    },

    /// Delete a plugin and everything it owns
    Delete {
        /// Plugin name
        plugin_name: String,
    },

    /// Enable a single skill owned by a plugin
    #[command(name = "enable-skill")]
    EnableSkill {
        /// Plugin name
        plugin_name: String,
        /// Skill name within the plugin
        skill_name: String,
    },

    /// Disable a single skill owned by a plugin
    #[command(name = "disable-skill")]
    DisableSkill {
        /// Plugin name
        plugin_name: String,
        /// Skill name within the plugin
        skill_name: String,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::from_code(&s.to_lowercase()).ok_or_else(|| format!("invalid locale '{}', expected: en, zh", s))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let addr = cli
        .addr
        .unwrap_or_else(|| "http://127.0.0.1:9527".to_string());
    let client = Client::new(&addr);

    let store = LocaleStore::default();
    let messages = Messages::new(store.resolve());

    let result = match cli.command {
        Command::List => skill_list(&client, &messages).await,
        Command::Enable { file_name } => skill_enable(&client, &messages, &file_name).await,
        Command::Disable { file_name } => skill_disable(&client, &messages, &file_name).await,
        Command::Delete {
            file_name,
            disabled,
        } => skill_delete(&client, &messages, &file_name, !disabled).await,
        Command::Upload { path, overwrite } => {
            skill_upload(&client, &messages, &path, overwrite).await
        }
        Command::Install { url } => skill_install(&client, &messages, &url).await,
        Command::Plugin { command } => match command {
            PluginCommand::Enable { plugin_name } => {
                plugin_enable(&client, &messages, &plugin_name).await
            }
            PluginCommand::Disable { plugin_name } => {
                plugin_disable(&client, &messages, &plugin_name).await
            }
            PluginCommand::Delete { plugin_name } => {
                plugin_delete(&client, &messages, &plugin_name).await
            }
            PluginCommand::EnableSkill {
                plugin_name,
                skill_name,
            } => plugin_skill_enable(&client, &messages, &plugin_name, &skill_name).await,
            PluginCommand::DisableSkill {
                plugin_name,
                skill_name,
            } => plugin_skill_disable(&client, &messages, &plugin_name, &skill_name).await,
        },
        Command::Locale { locale } => locale_command(&store, &messages, locale),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn skill_list(client: &Client, messages: &Messages) -> Result<(), ClientError> {
    let skills = client.list_skills().await?;
    render::print_skill_list(&skills, messages);
    Ok(())
}

async fn skill_enable(
    client: &Client,
    messages: &Messages,
    file_name: &str,
) -> Result<(), ClientError> {
    client.enable_skill(file_name).await?;
    println!("{}", messages.format("skill.enabled", &[("file", file_name)]));
    Ok(())
}

async fn skill_disable(
    client: &Client,
    messages: &Messages,
    file_name: &str,
) -> Result<(), ClientError> {
    client.disable_skill(file_name).await?;
    println!(
        "{}",
        messages.format("skill.disabled", &[("file", file_name)])
    );
    Ok(())
}

async fn skill_delete(
    client: &Client,
    messages: &Messages,
    file_name: &str,
    enabled: bool,
) -> Result<(), ClientError> {
    client.delete_skill(file_name, enabled).await?;
    println!("{}", messages.format("skill.deleted", &[("file", file_name)]));
    Ok(())
}

async fn skill_upload(
    client: &Client,
    messages: &Messages,
    path: &Path,
    overwrite: bool,
) -> Result<(), ClientError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| ClientError::IoError(format!("not a file: {}", path.display())))?;
    let content =
        std::fs::read(path).map_err(|e| ClientError::IoError(format!("{}: {}", path.display(), e)))?;

    client.upload_skill(&file_name, content, overwrite).await?;
    println!(
        "{}",
        messages.format("skill.uploaded", &[("file", &file_name)])
    );
    Ok(())
}

async fn skill_install(client: &Client, messages: &Messages, url: &str) -> Result<(), ClientError> {
    let installed = client.install_from_url(url).await?;
    println!(
        "{}",
        messages.format("skills.installed", &[("count", &installed.to_string())])
    );
    Ok(())
}

async fn plugin_enable(
    client: &Client,
    messages: &Messages,
    plugin_name: &str,
) -> Result<(), ClientError> {
    client.enable_plugin(plugin_name).await?;
    println!(
        "{}",
        messages.format("plugin.enabled", &[("plugin", plugin_name)])
    );
    Ok(())
}

async fn plugin_disable(
    client: &Client,
    messages: &Messages,
    plugin_name: &str,
) -> Result<(), ClientError> {
    client.disable_plugin(plugin_name).await?;
    println!(
        "{}",
        messages.format("plugin.disabled", &[("plugin", plugin_name)])
    );
    Ok(())
}

async fn plugin_delete(
    client: &Client,
    messages: &Messages,
    plugin_name: &str,
) -> Result<(), ClientError> {
    client.delete_plugin(plugin_name).await?;
    println!(
        "{}",
        messages.format("plugin.deleted", &[("plugin", plugin_name)])
    );
    Ok(())
}

async fn plugin_skill_enable(
    client: &Client,
    messages: &Messages,
    plugin_name: &str,
    skill_name: &str,
) -> Result<(), ClientError> {
    client.enable_plugin_skill(plugin_name, skill_name).await?;
    println!(
        "{}",
        messages.format(
            "plugin.skill.enabled",
            &[("plugin", plugin_name), ("skill", skill_name)]
        )
    );
    Ok(())
}

async fn plugin_skill_disable(
    client: &Client,
    messages: &Messages,
    plugin_name: &str,
    skill_name: &str,
) -> Result<(), ClientError> {
    client.disable_plugin_skill(plugin_name, skill_name).await?;
    println!(
        "{}",
        messages.format(
            "plugin.skill.disabled",
            &[("plugin", plugin_name), ("skill", skill_name)]
        )
    );
    Ok(())
}

/// Show the resolved locale, or persist a new one.
///
/// After a change the confirmation is printed in the new language.
fn locale_command(
    store: &LocaleStore,
    messages: &Messages,
    locale: Option<Locale>,
) -> Result<(), ClientError> {
    match locale {
        None => {
            println!(
                "{}",
                messages.format("locale.current", &[("locale", messages.locale().as_str())])
            );
        }
        Some(locale) => {
            let resolved = store
                .set(locale)
                .map_err(|e| ClientError::IoError(e.to_string()))?;
            let messages = Messages::new(resolved);
            println!(
                "{}",
                messages.format("locale.changed", &[("locale", resolved.as_str())])
            );
        }
    }
    Ok(())
}

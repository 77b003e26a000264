//! regmirror - registry mirror key-space tool

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use regmirror_cli::cmd;
use regmirror_cli::{AuthCommands, BackupCommands, Cli, Commands, KeyCommands, load_config};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::UploadPath {
            name,
            version,
            filename,
        } => {
            cmd::upload::upload_path(&config, &name, &version, &filename);
            Ok(())
        }
        Commands::Key { command } => {
            match command {
                KeyCommands::Tarball { name, filename } => cmd::key::tarball(&name, &filename),
                KeyCommands::Manifest { name, version } => cmd::key::manifest(&name, &version),
                KeyCommands::Tag { name, tag } => cmd::key::tag(&name, &tag),
                KeyCommands::Unpublish { name } => cmd::key::unpublish(&name),
                KeyCommands::Dirs { name } => cmd::key::dirs(&name),
            }
            Ok(())
        }
        Commands::Backup { command } => {
            match command {
                BackupCommands::Decode { files } => cmd::backup::decode(&files),
                BackupCommands::EncodeTag { tag } => cmd::backup::encode_tag(&tag),
                BackupCommands::EncodeVersion { version } => cmd::backup::encode_version(&version),
            }
            Ok(())
        }
        Commands::Auth { command } => {
            match command {
                AuthCommands::Classify { header } => cmd::auth::classify(&header),
                AuthCommands::Admin { user } => cmd::auth::admin(&config, &user),
                AuthCommands::Maintainer {
                    user,
                    admin,
                    maintainers,
                } => cmd::auth::maintainer(&user, admin, &maintainers),
                AuthCommands::Private { name } => cmd::auth::private(&config, &name),
                AuthCommands::SyncWorker { cache, user_agent } => {
                    cmd::auth::sync_worker(cache.as_deref(), user_agent.as_deref());
                }
            }
            Ok(())
        }
        Commands::TarballUrl {
            name,
            version,
            host,
            request_host,
            request_protocol,
            manifest,
        } => {
            let source = match (manifest.as_deref(), name.as_deref(), version.as_deref()) {
                (Some(path), _, _) => cmd::url::UrlSource::Manifest(path),
                (None, Some(name), Some(version)) => cmd::url::UrlSource::Bare { name, version },
                _ => anyhow::bail!("tarball-url needs <NAME> <VERSION> or --manifest"),
            };
            cmd::url::tarball_url(
                &config,
                &cmd::url::UrlRequest {
                    source,
                    host: host.as_deref(),
                    request_host: &request_host,
                    request_protocol: &request_protocol,
                },
            )
        }
        Commands::LocalModule { file } => cmd::local::local_module(&file),
    }
}

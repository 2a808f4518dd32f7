use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use jdeps_runner::cli::{Cli, Commands, ResolverArgs};
use jdeps_runner::config::{JdepsConfig, ResolverConfig, Verbosity};
use jdeps_runner::resolver::{JdepsResolver, ToolchainDir};
use jdeps_runner::target::StaticTarget;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            classes,
            class_path,
            dot_output,
            verbose,
            include,
            api_only,
            profile,
            recursive,
            output_directory,
            resolver,
            config,
        } => {
            let file = load_file_config(config.as_deref())?;

            let mut analysis = file.analysis;
            if dot_output.is_some() {
                analysis.dot_output = dot_output;
            }
            if let Some(level) = verbose {
                analysis.verbose = Some(Verbosity::from(level));
            }
            if include.is_some() {
                analysis.include = include;
            }
            analysis.api_only |= api_only;
            analysis.profile |= profile;
            analysis.recursive |= recursive;
            if let Some(dir) = output_directory {
                analysis.output_directory = dir;
            }

            let resolver = build_resolver(&resolver, &file.resolver);
            let target = StaticTarget::new(classes, class_path);
            jdeps_runner::run_analysis(&resolver, &analysis, &target)?;
            Ok(())
        }
        Commands::Locate { resolver, config } => {
            let file = load_file_config(config.as_deref())?;
            let resolver = build_resolver(&resolver, &file.resolver);
            println!("{}", resolver.resolve()?.display());
            Ok(())
        }
    }
}

fn load_file_config(path: Option<&Path>) -> Result<JdepsConfig> {
    match path {
        Some(path) => Ok(JdepsConfig::load(path)?),
        None => Ok(JdepsConfig::default()),
    }
}

// Command-line flags win over configuration-file values.
fn build_resolver(flags: &ResolverArgs, file: &ResolverConfig) -> JdepsResolver {
    let mut resolver = JdepsResolver::new();
    if let Some(home) = pick(&flags.java_home, &file.java_home) {
        resolver = resolver.with_runtime_home(home);
    }
    if let Some(toolchain) = pick(&flags.toolchain, &file.toolchain) {
        resolver = resolver.with_toolchain(Box::new(ToolchainDir::new(toolchain)));
    }
    if let Some(version) = flags.java_version.or(file.java_version) {
        resolver = resolver.with_java_version(version);
    }
    resolver
}

fn pick(flag: &Option<PathBuf>, file: &Option<PathBuf>) -> Option<PathBuf> {
    flag.clone().or_else(|| file.clone())
}

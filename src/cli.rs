use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jdeps-runner")]
#[command(about = "Run the JDK jdeps class dependency analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze compiled classes with jdeps
    Analyze {
        /// Class file, directory, or JAR to analyze
        classes: PathBuf,

        /// Classpath entries the analysis resolves against
        #[arg(long = "class-path", visible_alias = "cp", value_delimiter = ',')]
        class_path: Vec<PathBuf>,

        /// Destination directory for DOT file output
        #[arg(long = "dot-output")]
        dot_output: Option<PathBuf>,

        /// Dependency detail: class, package, or anything else for the full listing
        #[arg(long)]
        verbose: Option<String>,

        /// Restrict analysis to classes matching the pattern
        #[arg(long)]
        include: Option<String>,

        /// Restrict analysis to public and protected API signatures
        #[arg(long = "apionly")]
        api_only: bool,

        /// Show profile or the file containing a package
        #[arg(long)]
        profile: bool,

        /// Recursively traverse all dependencies
        #[arg(long, short = 'R')]
        recursive: bool,

        /// Directory receiving diagnostic output
        #[arg(long = "output-directory")]
        output_directory: Option<PathBuf>,

        #[command(flatten)]
        resolver: ResolverArgs,

        /// Configuration file (TOML); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve and print the path of the jdeps executable without running it
    Locate {
        #[command(flatten)]
        resolver: ResolverArgs,

        /// Configuration file (TOML); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Flags feeding executable resolution
#[derive(Args, Debug)]
pub struct ResolverArgs {
    /// JDK home whose tools take priority over filesystem heuristics
    #[arg(long)]
    pub toolchain: Option<PathBuf>,

    /// Installation directory of the Java runtime the build executes on
    #[arg(long = "java-home")]
    pub java_home: Option<PathBuf>,

    /// Specification version of that runtime, e.g. 1.6 or 1.8
    #[arg(long = "java-version")]
    pub java_version: Option<f32>,
}

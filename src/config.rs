use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about, version, author)]
pub struct Opts {
    /// Name of the first branch
    #[clap(long)]
    pub branch1: String,
    /// Name of the second branch, the branch in which we will search for newer versions
    #[clap(long)]
    pub branch2: String,
    /// Directory where the result will be written as <branch1>-<branch2>.json
    #[clap(long)]
    pub write: Option<PathBuf>,
    /// Print the result to stdout as JSON
    #[clap(long)]
    pub console: bool,
    /// Base URL of the branch package export API
    #[clap(
        long,
        default_value = "https://rdb.altlinux.org/api/export/branch_binary_packages"
    )]
    pub api_base: String,
}

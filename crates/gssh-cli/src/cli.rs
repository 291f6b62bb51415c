//! Command-line definitions

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gssh", version)]
#[command(about = "GlobalSSH management, such as create, modify, list and delete", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Region attached to every request
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Project attached to every request
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all GlobalSSH instances
    #[command(name = "ls", visible_alias = "list")]
    List,

    /// Create GlobalSSH instance
    #[command(after_help = "Example: gssh create --area Washington --target-ip 8.8.8.8")]
    Create(CreateArgs),

    /// Delete GlobalSSH instances
    #[command(after_help = "Example: gssh delete --id uga-xx1 --id uga-xx2")]
    Delete(DeleteArgs),

    /// Modify GlobalSSH instance, including port and remark attribute
    #[command(after_help = "Example: gssh modify --id uga-xxx --port 22")]
    Modify(ModifyArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// Location of the source server: LosAngeles, Singapore, HongKong, Tokyo, Washington or Frankfurt
    #[arg(long)]
    pub area: String,

    /// IP of the source server
    #[arg(long)]
    pub target_ip: String,

    /// Port of the SSH service, between 1 and 65535, not 80 or 443
    #[arg(long, default_value = "22")]
    pub port: String,

    /// Remark of your GlobalSSH
    #[arg(long)]
    pub remark: Option<String>,

    /// Coupon ID, deducts part of the payment
    #[arg(long)]
    pub coupon_id: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    /// ID of a GlobalSSH instance to delete; repeat for several
    #[arg(long = "id", value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ModifyArgs {
    /// Instance ID of your GlobalSSH
    #[arg(long)]
    pub id: String,

    /// New port of the SSH service
    #[arg(long)]
    pub port: Option<String>,

    /// New remark of your GlobalSSH
    #[arg(long)]
    pub remark: Option<String>,
}

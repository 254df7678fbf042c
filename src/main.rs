// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use clap::{Parser, Subcommand};
use dashboard::config::Config;
use dashboard::{ResourceType, build, get, run};

#[derive(Parser)]
#[command(name = "volcano-dashboard")]
#[command(about = "Backend of the Volcano scheduler dashboard", long_about = None)]
#[command(version = build::PKG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one resource as YAML
    Get {
        #[arg(value_enum)]
        kind: ResourceType,

        name: String,

        /// Namespace of namespaced kinds, `default` if not set
        #[arg(short, long)]
        namespace: Option<String>,

        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,

        #[command(flatten)]
        config: Config,
    },

    /// Run the HTTP server
    Server {
        #[command(flatten)]
        config: Config,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            kind,
            name,
            namespace,
            file,
            config,
        } => get(config, kind, name, namespace, file).await?,
        Commands::Server { config } => run(config).await?,
    }

    Ok(())
}

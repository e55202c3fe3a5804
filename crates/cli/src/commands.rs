//! Subcommand definitions and dispatch

use crate::output;
use anyhow::Result;
use clap::{Args, Subcommand};
use trigctl_core::application::mqtrigger::{CreateRequest, UpdateRequest};
use trigctl_core::application::TriggerService;
use trigctl_core::AppError;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage message queue triggers
    #[command(subcommand, visible_alias = "mqt")]
    Mqtrigger(MqTriggerCommands),
}

#[derive(Subcommand, Debug)]
pub enum MqTriggerCommands {
    /// Create a message queue trigger
    Create(CreateArgs),

    /// Get a message queue trigger (not implemented yet)
    Get {
        /// Trigger name
        #[arg(long)]
        name: Option<String>,
    },

    /// Update the topics of a message queue trigger
    Update(UpdateArgs),

    /// Delete a message queue trigger
    Delete {
        /// Trigger name
        #[arg(long)]
        name: String,
    },

    /// List message queue triggers
    List {
        /// Only list triggers of this message queue type
        #[arg(long)]
        mqtype: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Trigger name (a random name is generated when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Function to invoke
    #[arg(long)]
    pub function: String,

    /// Function uid, pins a specific function version
    #[arg(long)]
    pub uid: Option<String>,

    /// Message queue type (default: nats-streaming)
    #[arg(long)]
    pub mqtype: Option<String>,

    /// Topic to listen on
    #[arg(long)]
    pub topic: String,

    /// Topic to publish function responses to
    #[arg(long)]
    pub resptopic: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Trigger name
    #[arg(long)]
    pub name: String,

    /// New topic to listen on (unchanged when omitted)
    #[arg(long)]
    pub topic: Option<String>,

    /// New response topic (cleared when omitted or empty)
    #[arg(long)]
    pub resptopic: Option<String>,
}

impl From<CreateArgs> for CreateRequest {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            function: Some(args.function),
            function_uid: args.uid,
            mq_type: args.mqtype,
            topic: Some(args.topic),
            response_topic: args.resptopic,
        }
    }
}

impl From<UpdateArgs> for UpdateRequest {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: Some(args.name),
            topic: args.topic,
            response_topic: args.resptopic,
        }
    }
}

/// Input problems are reported as-is, everything else names the failed action
fn failure(err: AppError, action: &str) -> anyhow::Error {
    if err.is_validation() {
        err.into()
    } else {
        anyhow::Error::new(err).context(format!("Failed to {}", action))
    }
}

/// Run one trigger subcommand, returning what should be printed on stdout
pub async fn execute(service: &TriggerService, command: MqTriggerCommands) -> Result<String> {
    match command {
        MqTriggerCommands::Create(args) => {
            let name = service
                .create(args.into())
                .await
                .map_err(|e| failure(e, "create message queue trigger"))?;
            Ok(output::created(&name))
        }

        MqTriggerCommands::Get { name } => match service.get(name).await {
            Ok(never) => match never {},
            Err(e) => Err(failure(e, "get message queue trigger")),
        },

        MqTriggerCommands::Update(args) => {
            let name = service
                .update(args.into())
                .await
                .map_err(|e| failure(e, "update message queue trigger"))?;
            Ok(output::updated(&name))
        }

        MqTriggerCommands::Delete { name } => {
            let name = service
                .delete(Some(name))
                .await
                .map_err(|e| failure(e, "delete message queue trigger"))?;
            Ok(output::deleted(&name))
        }

        MqTriggerCommands::List { mqtype } => {
            let triggers = service
                .list(mqtype)
                .await
                .map_err(|e| failure(e, "list message queue triggers"))?;
            Ok(output::trigger_table(&triggers))
        }
    }
}

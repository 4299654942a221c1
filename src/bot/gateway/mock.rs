//! In-memory `GuildGateway` that records every mutating call.
//!
//! Seeded with roles, channels, voice occupants and permissions for a single guild.
//! Role mutations are applied to the seeded state so repeated events observe the
//! effect of earlier ones.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::all::Permissions;
use serenity::async_trait;

use super::GuildGateway;
use crate::{
    error::AppError,
    model::{
        discord::{ChannelKind, DiscordChannel, DiscordRole},
        message::Report,
    },
};

/// A mutating call issued against the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    CreateRole { name: String },
    DeleteRole { role_id: u64 },
    RenameRole { role_id: u64, name: String },
    AddMemberRole { user_id: u64, role_id: u64 },
    RemoveMemberRole { user_id: u64, role_id: u64 },
    RenameChannel { channel_id: u64, name: String },
    SetMute { user_id: u64, mute: bool },
    SendMessage { channel_id: u64, content: String },
    Reply { channel_id: u64, content: String },
    SendReport { channel_id: u64, report: Report },
}

#[derive(Default)]
struct State {
    roles: Vec<DiscordRole>,
    channels: Vec<DiscordChannel>,
    voice_members: HashMap<u64, Vec<u64>>,
    permissions: HashMap<u64, Permissions>,
    member_count: u64,
    next_id: u64,
    calls: Vec<GatewayCall>,
    lookups: usize,
}

pub struct MockGateway {
    guild_id: u64,
    state: Mutex<State>,
    /// Operation names that fail instead of taking effect.
    failing: HashSet<&'static str>,
}

impl MockGateway {
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            state: Mutex::new(State {
                next_id: 10_000,
                ..Default::default()
            }),
            failing: HashSet::new(),
        }
    }

    pub fn with_role(self, role_id: u64, name: &str) -> Self {
        self.state.lock().unwrap().roles.push(DiscordRole {
            role_id,
            guild_id: self.guild_id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_channel(self, channel_id: u64, name: &str, kind: ChannelKind) -> Self {
        self.state.lock().unwrap().channels.push(DiscordChannel {
            channel_id,
            guild_id: self.guild_id,
            name: name.to_string(),
            kind,
        });
        self
    }

    pub fn with_voice_members(self, channel_id: u64, members: &[u64]) -> Self {
        self.state
            .lock()
            .unwrap()
            .voice_members
            .insert(channel_id, members.to_vec());
        self
    }

    pub fn with_permissions(self, user_id: u64, permissions: Permissions) -> Self {
        self.state
            .lock()
            .unwrap()
            .permissions
            .insert(user_id, permissions);
        self
    }

    pub fn with_member_count(self, count: u64) -> Self {
        self.state.lock().unwrap().member_count = count;
        self
    }

    /// Makes every call of the named operation fail.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of role and channel list reads.
    pub fn lookups(&self) -> usize {
        self.state.lock().unwrap().lookups
    }

    pub fn role_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .roles
            .iter()
            .map(|role| role.name.clone())
            .collect()
    }

    pub fn channel_name(&self, channel_id: u64) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .channels
            .iter()
            .find(|channel| channel.channel_id == channel_id)
            .map(|channel| channel.name.clone())
    }

    pub fn reports(&self) -> Vec<Report> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::SendReport { report, .. } => Some(report),
                _ => None,
            })
            .collect()
    }

    fn check(&self, operation: &'static str) -> Result<(), AppError> {
        if self.failing.contains(operation) {
            return Err(AppError::NotFound(format!("{} failed", operation)));
        }
        Ok(())
    }

    fn record(&self, call: GatewayCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl GuildGateway for MockGateway {
    async fn roles(&self, _guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        self.check("roles")?;
        let mut state = self.state.lock().unwrap();
        state.lookups += 1;
        Ok(state.roles.clone())
    }

    async fn create_role(&self, guild_id: u64, name: &str) -> Result<DiscordRole, AppError> {
        self.record(GatewayCall::CreateRole {
            name: name.to_string(),
        });
        self.check("create_role")?;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let role = DiscordRole {
            role_id: state.next_id,
            guild_id,
            name: name.to_string(),
        };
        state.roles.push(role.clone());

        Ok(role)
    }

    async fn delete_role(&self, _guild_id: u64, role_id: u64) -> Result<(), AppError> {
        self.record(GatewayCall::DeleteRole { role_id });
        self.check("delete_role")?;

        self.state
            .lock()
            .unwrap()
            .roles
            .retain(|role| role.role_id != role_id);

        Ok(())
    }

    async fn rename_role(&self, _guild_id: u64, role_id: u64, name: &str) -> Result<(), AppError> {
        self.record(GatewayCall::RenameRole {
            role_id,
            name: name.to_string(),
        });
        self.check("rename_role")?;

        if let Some(role) = self
            .state
            .lock()
            .unwrap()
            .roles
            .iter_mut()
            .find(|role| role.role_id == role_id)
        {
            role.name = name.to_string();
        }

        Ok(())
    }

    async fn add_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.record(GatewayCall::AddMemberRole { user_id, role_id });
        self.check("add_member_role")
    }

    async fn remove_member_role(
        &self,
        _guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), AppError> {
        self.record(GatewayCall::RemoveMemberRole { user_id, role_id });
        self.check("remove_member_role")
    }

    async fn channels(&self, _guild_id: u64) -> Result<Vec<DiscordChannel>, AppError> {
        self.check("channels")?;
        let mut state = self.state.lock().unwrap();
        state.lookups += 1;
        Ok(state.channels.clone())
    }

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError> {
        self.record(GatewayCall::RenameChannel {
            channel_id,
            name: name.to_string(),
        });
        self.check("rename_channel")?;

        if let Some(channel) = self
            .state
            .lock()
            .unwrap()
            .channels
            .iter_mut()
            .find(|channel| channel.channel_id == channel_id)
        {
            channel.name = name.to_string();
        }

        Ok(())
    }

    async fn voice_channel_members(
        &self,
        _guild_id: u64,
        channel_id: u64,
    ) -> Result<Vec<u64>, AppError> {
        self.check("voice_channel_members")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .voice_members
            .get(&channel_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_member_mute(
        &self,
        _guild_id: u64,
        user_id: u64,
        mute: bool,
    ) -> Result<(), AppError> {
        self.record(GatewayCall::SetMute { user_id, mute });
        self.check("set_member_mute")
    }

    async fn member_permissions(
        &self,
        _guild_id: u64,
        user_id: u64,
    ) -> Result<Permissions, AppError> {
        self.check("member_permissions")?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .permissions
            .get(&user_id)
            .copied()
            .unwrap_or_else(Permissions::empty))
    }

    async fn member_count(&self, _guild_id: u64) -> Result<u64, AppError> {
        self.check("member_count")?;
        Ok(self.state.lock().unwrap().member_count)
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        self.record(GatewayCall::SendMessage {
            channel_id,
            content: content.to_string(),
        });
        self.check("send_message")
    }

    async fn reply(&self, channel_id: u64, _message_id: u64, content: &str) -> Result<(), AppError> {
        self.record(GatewayCall::Reply {
            channel_id,
            content: content.to_string(),
        });
        self.check("reply")
    }

    async fn send_report(&self, channel_id: u64, report: &Report) -> Result<(), AppError> {
        self.record(GatewayCall::SendReport {
            channel_id,
            report: report.clone(),
        });
        self.check("send_report")
    }
}

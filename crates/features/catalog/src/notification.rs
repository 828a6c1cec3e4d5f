//! Notification channels; each variant carries its own send behavior.

use crate::view::Detail;
use canon_registry::{Codec, Dispatcher, Handler, RegistryError, VariantSet, closed_set, handler};
use tracing::info;

#[closed_set(name = "NotificationChannel")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub channel: NotificationChannel,
    pub description: &'static str,
}

impl ChannelInfo {
    const fn of(channel: NotificationChannel) -> Self {
        let description = match channel {
            NotificationChannel::Email => "Email notification",
            NotificationChannel::Sms => "SMS notification",
            NotificationChannel::Push => "Push notification",
        };
        Self { channel, description }
    }
}

impl Detail for ChannelInfo {
    fn detail(&self) -> String {
        self.description.to_owned()
    }
}

/// Outcome of sending one message through a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: NotificationChannel,
    pub rendered: String,
}

type SendHandler = Handler<ChannelInfo, str, Delivery>;

fn deliver(info: &ChannelInfo, rendered: String) -> Delivery {
    info!(channel = ?info.channel, message = %rendered, "Notification delivered");
    Delivery { channel: info.channel, rendered }
}

fn sender(channel: NotificationChannel) -> SendHandler {
    match channel {
        NotificationChannel::Email => handler(|info: &ChannelInfo, message: &str| {
            deliver(info, format!("[EMAIL] Sending email with message: {message}"))
        }),
        NotificationChannel::Sms => handler(|info: &ChannelInfo, message: &str| {
            deliver(info, format!("[SMS] Sending SMS with message: {message}"))
        }),
        NotificationChannel::Push => handler(|info: &ChannelInfo, message: &str| {
            deliver(info, format!("[PUSH] Sending push notification: {message}"))
        }),
    }
}

#[derive(Debug)]
pub struct NotificationChannels {
    senders: Dispatcher<ChannelInfo, str, Delivery>,
    codec: Codec<ChannelInfo, SendHandler>,
}

impl NotificationChannels {
    pub(crate) fn declare() -> Result<Self, RegistryError> {
        let set = VariantSet::from_closed(ChannelInfo::of)
            .bind_with(|info| Some(sender(info.channel)))
            .require_behavior()
            .build()?;
        let senders = Dispatcher::new(set)?;
        let codec = Codec::canonical(senders.shared_set())?;
        Ok(Self { senders, codec })
    }

    #[must_use]
    pub fn set(&self) -> &VariantSet<ChannelInfo, SendHandler> {
        self.senders.set()
    }

    #[must_use]
    pub const fn codec(&self) -> &Codec<ChannelInfo, SendHandler> {
        &self.codec
    }

    /// # Errors
    ///
    /// Never fails for the declared catalog.
    pub fn send(&self, channel: NotificationChannel, message: &str) -> Result<Delivery, RegistryError> {
        let variant = self.set().record_of(channel)?;
        self.senders.dispatch(variant, message)
    }

    /// # Errors
    ///
    /// `UnknownIdentity` when no channel has this identity.
    pub fn send_via(&self, identity: &str, message: &str) -> Result<Delivery, RegistryError> {
        self.senders.dispatch_identity(identity, message)
    }

    /// Sends `message` through every channel in declaration order.
    pub fn broadcast(&self, message: &str) -> Vec<Delivery> {
        self.senders.dispatch_all(message).map(|(_, delivery)| delivery).collect()
    }
}

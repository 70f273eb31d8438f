// Factory Pattern: callers name a notification kind and get back a trait
// object; they never see the concrete types.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::trace::Trace;

pub trait Notification {
    /// Delivers `message` and returns the line describing the delivery.
    fn send(&self, message: &str) -> String;
}

struct EmailNotification;
impl Notification for EmailNotification {
    fn send(&self, message: &str) -> String {
        format!("Sending Email: \"{}\"", message)
    }
}

struct SmsNotification;
impl Notification for SmsNotification {
    fn send(&self, message: &str) -> String {
        format!("Sending SMS: \"{}\"", message)
    }
}

struct PushNotification;
impl Notification for PushNotification {
    fn send(&self, message: &str) -> String {
        format!("Sending Push Notification: \"{}\"", message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Sms,
    Push,
}

impl FromStr for NotificationKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(NotificationKind::Email),
            "sms" => Ok(NotificationKind::Sms),
            "push" => Ok(NotificationKind::Push),
            _ => Err(PatternError::UnknownNotificationKind(s.to_string())),
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Email => "email",
            NotificationKind::Sms => "sms",
            NotificationKind::Push => "push",
        };
        f.write_str(name)
    }
}

pub struct NotificationFactory;

impl NotificationFactory {
    pub fn create(kind: NotificationKind) -> Box<dyn Notification> {
        match kind {
            NotificationKind::Email => Box::new(EmailNotification),
            NotificationKind::Sms => Box::new(SmsNotification),
            NotificationKind::Push => Box::new(PushNotification),
        }
    }

    /// Parses `kind` and builds the matching notifier.
    pub fn create_from_str(kind: &str) -> Result<Box<dyn Notification>, PatternError> {
        Ok(Self::create(kind.parse()?))
    }
}

pub fn run_demo(trace: &Trace) -> Result<(), PatternError> {
    trace.banner("Factory Pattern Example");

    let messages = [
        ("email", "Hello, this is a test email."),
        ("sms", "Your verification code is 12345."),
        ("push", "New article has been published!"),
    ];
    for (kind, message) in messages {
        let notifier = NotificationFactory::create_from_str(kind)?;
        trace.line(notifier.send(message));
    }

    trace.line("");
    trace.line(
        "Client code does not depend on concrete types like EmailNotification or SmsNotification.",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("email".parse::<NotificationKind>().unwrap(), NotificationKind::Email);
        assert_eq!("SMS".parse::<NotificationKind>().unwrap(), NotificationKind::Sms);
        assert_eq!("Push".parse::<NotificationKind>().unwrap(), NotificationKind::Push);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "fax".parse::<NotificationKind>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownNotificationKind(ref k) if k == "fax"));
        assert!(NotificationFactory::create_from_str("pigeon").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [NotificationKind::Email, NotificationKind::Sms, NotificationKind::Push] {
            assert_eq!(kind.to_string().parse::<NotificationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_created_notifiers_send() {
        let email = NotificationFactory::create(NotificationKind::Email);
        let push = NotificationFactory::create(NotificationKind::Push);

        assert_eq!(email.send("hi"), "Sending Email: \"hi\"");
        assert_eq!(push.send("hi"), "Sending Push Notification: \"hi\"");
    }

    #[test]
    fn test_demo() {
        let trace = Trace::recording();
        run_demo(&trace).unwrap();
        let events = trace.events();
        assert_eq!(events[1], "Sending Email: \"Hello, this is a test email.\"");
        assert_eq!(events[2], "Sending SMS: \"Your verification code is 12345.\"");
        assert_eq!(events[3], "Sending Push Notification: \"New article has been published!\"");
    }
}

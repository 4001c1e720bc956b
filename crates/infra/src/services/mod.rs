mod notification;

pub use notification::{
    EmailNotification, EmailType, HttpMailer, IMailer, InMemoryMailer, NotificationService,
};

//! Profile commands: whoami, role, about, links.
//!
//! Content comes from the session [`Profile`](termfolio_types::config::Profile).

use crate::interpreter::{
    Command, CommandOutput, CommandRegistry, Environment, Payload, ResponseKind, ResponseRecord,
};

/// Register `whoami` and `role`.
pub fn register_identity_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(RoleCmd));
}

/// Register `about` and `links`.
pub fn register_profile_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(LinksCmd));
}

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display information about me"
    }
    fn execute(&self, _arg: &str, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Response(ResponseRecord::text(
            ResponseKind::Identity,
            env.profile.name.as_str(),
        ))
    }
}

struct RoleCmd;
impl Command for RoleCmd {
    fn name(&self) -> &str {
        "role"
    }
    fn description(&self) -> &str {
        "Display my professional role"
    }
    fn execute(&self, _arg: &str, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Response(ResponseRecord::text(
            ResponseKind::Role,
            env.profile.role.as_str(),
        ))
    }
}

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Display detailed information about me"
    }
    fn execute(&self, _arg: &str, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Response(ResponseRecord::text(
            ResponseKind::Biography,
            env.profile.about.as_str(),
        ))
    }
}

struct LinksCmd;
impl Command for LinksCmd {
    fn name(&self) -> &str {
        "links"
    }
    fn description(&self) -> &str {
        "Show my social media links"
    }
    fn execute(&self, _arg: &str, env: &Environment<'_>) -> CommandOutput {
        CommandOutput::Response(ResponseRecord {
            kind: ResponseKind::Links,
            payload: Payload::Links {
                intro: env.profile.links_intro.clone(),
                links: env.profile.links.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use termfolio_types::config::{Link, Profile};

    use crate::interpreter::{Interpreter, Payload, ResponseKind};

    #[test]
    fn default_profile_responses() {
        let interp = Interpreter::with_builtins();
        let whoami = interp.interpret("whoami");
        let record = whoami.record().unwrap();
        assert_eq!(record.kind, ResponseKind::Identity);
        assert_eq!(record.as_text(), Some("Abdullokh Saidakbarov"));

        let role = interp.interpret("Role");
        assert_eq!(role.record().unwrap().kind, ResponseKind::Role);
        assert_eq!(role.record().unwrap().as_text(), Some("Frontend Developer"));

        let about = interp.interpret("about");
        let record = about.record().unwrap();
        assert_eq!(record.kind, ResponseKind::Biography);
        assert!(record.as_text().unwrap().starts_with("Aspiring Frontend Developer"));
    }

    #[test]
    fn links_are_data_not_markup() {
        let interp = Interpreter::with_builtins();
        let out = interp.interpret("LINKS");
        let record = out.record().unwrap();
        assert_eq!(record.kind, ResponseKind::Links);
        match &record.payload {
            Payload::Links { intro, links } => {
                assert_eq!(intro, "Here are my social media links:");
                let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
                assert_eq!(labels, ["Telegram", "Instagram", "GitHub"]);
                assert!(links.iter().all(|l| l.url.starts_with("https://")));
                assert!(links.iter().all(|l| !l.label.contains('<')));
            },
            Payload::Text(_) => panic!("expected links payload"),
        }
    }

    #[test]
    fn custom_profile_flows_through() {
        let profile = Profile {
            name: "Grace Hopper".into(),
            role: "Rear Admiral".into(),
            links: vec![Link::new("Blog", "https://example.org")],
            ..Profile::default()
        };
        let interp = Interpreter::with_builtins().with_profile(profile);
        assert_eq!(
            interp.interpret("whoami").record().unwrap().as_text(),
            Some("Grace Hopper")
        );
        assert_eq!(
            interp.interpret("role").record().unwrap().as_text(),
            Some("Rear Admiral")
        );
        match &interp.interpret("links").record().unwrap().payload {
            Payload::Links { links, .. } => assert_eq!(links.len(), 1),
            Payload::Text(_) => panic!("expected links payload"),
        }
    }
}

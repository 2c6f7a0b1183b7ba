//! Copy and calls to action for the six page sections

use crate::side_nav::NavItem;
use crate::signals::SignalSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    /// Open the contact form
    OpenContact,
    /// Jump to a step (not checked against the page length)
    GotoStep(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub action: CtaAction,
}

impl Cta {
    const fn contact(label: &'static str) -> Self {
        Self {
            label,
            action: CtaAction::OpenContact,
        }
    }

    const fn goto(label: &'static str, step: i64) -> Self {
        Self {
            label,
            action: CtaAction::GotoStep(step),
        }
    }

    /// Emit this call to action's signal on behalf of `source`
    pub fn activate(&self, source: &str, signals: &SignalSender) {
        match self.action {
            CtaAction::OpenContact => signals.open_contact(source),
            CtaAction::GotoStep(step) => signals.goto_step(step),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub step: usize,
    pub id: &'static str,
    pub title: &'static str,
    pub nav_label: &'static str,
    pub icon: &'static str,
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub body: Vec<&'static str>,
    pub ctas: Vec<Cta>,
}

impl SectionContent {
    pub fn nav_item(&self) -> NavItem {
        NavItem::new(self.step, self.nav_label, self.icon)
    }
}

/// All sections in step order
pub fn page_sections() -> Vec<SectionContent> {
    vec![
        SectionContent {
            step: 0,
            id: "hero",
            title: "ByteForge",
            nav_label: "Home",
            icon: "◆",
            eyebrow: "Web & App + Managed IT",
            headline: "Web & App Design + Managed IT that just works.",
            body: vec![
                "One team for the site your customers see",
                "and the systems your staff depend on.",
                "",
                "Fast launches, secure networks, and support that answers.",
            ],
            ctas: vec![
                Cta::contact("Schedule a Strategy Call"),
                Cta::goto("View Services", 4),
            ],
        },
        SectionContent {
            step: 1,
            id: "services",
            title: "Managed IT Services",
            nav_label: "Services",
            icon: "▣",
            eyebrow: "US-focused delivery for modern teams",
            headline: "Everything it takes to keep your business running.",
            body: vec![
                "• Active Directory, DHCP, Printer Servers",
                "• Switch deployment & network optimization",
                "• Virtualization (VMware / Hyper-V)",
                "• Firewall configuration & monitoring",
                "• Antivirus / endpoint policy management",
                "• Backup strategy + restore testing",
            ],
            ctas: vec![
                Cta::contact("Get IT Support"),
                Cta::goto("See the Studio", 7),
            ],
        },
        SectionContent {
            step: 2,
            id: "web",
            title: "Web & App Studio",
            nav_label: "Web & App",
            icon: "◧",
            eyebrow: "Web Design · App Development",
            headline: "Sites and apps built to convert, not just to look good.",
            body: vec![
                "• Marketing sites with real performance budgets",
                "• MVP apps from clickable prototype to store release",
                "• Design systems your team can keep extending",
            ],
            ctas: vec![
                Cta::contact("Start a Web/App Project"),
                Cta::goto("Skip to Next Steps", 5),
            ],
        },
        SectionContent {
            step: 3,
            id: "ai",
            title: "AI Systems",
            nav_label: "AI",
            icon: "◎",
            eyebrow: "AI / Agents / CRM / ERM",
            headline: "What we build",
            body: vec![
                "• Support agents grounded in your own documents",
                "• CRM and ERM workflows that update themselves",
                "• Internal tools that turn email into structured work",
            ],
            ctas: vec![
                Cta::contact("Start an AI Project"),
                Cta::goto("Proof + Next Steps", 5),
            ],
        },
        SectionContent {
            step: 4,
            id: "interlude",
            title: "ByteForge",
            nav_label: "Brand",
            icon: "✦",
            eyebrow: "Built. Secured. Supported.",
            headline: "Forged for businesses that can't afford downtime.",
            body: vec!["", "Scroll to continue"],
            ctas: vec![Cta::contact("Talk to an Engineer")],
        },
        SectionContent {
            step: 5,
            id: "final",
            title: "Proof + Next Steps",
            nav_label: "Contact",
            icon: "✉",
            eyebrow: "Proof + Contact",
            headline: "Tell us where it hurts. We'll bring a plan.",
            body: vec![
                "• What outcome matters most (speed, cost, security, growth)?",
                "• Current tools / stack and what's broken",
                "• Timeline and budget range",
            ],
            ctas: vec![Cta::contact("Start a Project"), Cta::goto("Back to Top", 0)],
        },
    ]
}

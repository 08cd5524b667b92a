use std::fmt;
use std::str::FromStr;

use crate::Item;

/// Which listing page a browser serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListKind {
    #[default]
    Jobs,
    Posts,
    Portfolio,
}

impl ListKind {
    /// Durable-storage key for the saved set of this list.
    pub fn storage_key(self) -> &'static str {
        match self {
            ListKind::Jobs => "savedJobs_v1",
            ListKind::Posts => "savedPosts_v1",
            ListKind::Portfolio => "savedWork_v1",
        }
    }

    pub fn export_file_name(self) -> &'static str {
        match self {
            ListKind::Jobs => "jobs.csv",
            ListKind::Posts => "posts.csv",
            ListKind::Portfolio => "portfolio.csv",
        }
    }

    /// Label shown for the category dimension.
    pub fn category_label(self) -> &'static str {
        match self {
            ListKind::Jobs => "department",
            ListKind::Posts | ListKind::Portfolio => "category",
        }
    }

    /// Built-in source for this list.
    pub fn fixture(self) -> Vec<Item> {
        match self {
            ListKind::Jobs => sample_jobs(),
            ListKind::Posts => sample_posts(),
            ListKind::Portfolio => sample_portfolio(),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListKind::Jobs => "jobs",
            ListKind::Posts => "posts",
            ListKind::Portfolio => "portfolio",
        };
        f.write_str(name)
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jobs" | "careers" | "career" => Ok(ListKind::Jobs),
            "posts" | "blog" => Ok(ListKind::Posts),
            "portfolio" | "work" => Ok(ListKind::Portfolio),
            other => Err(format!("unknown list kind: {other}")),
        }
    }
}

pub fn sample_jobs() -> Vec<Item> {
    vec![
        Item::new("1", "Frontend Developer", "Engineering")
            .with_location("Remote")
            .with_kind("Full-Time")
            .with_date("2025-09-25")
            .with_description("React, Next.js aur Tailwind se responsive apps build karna.")
            .with_byline("Mid")
            .with_figure("₹6-10 LPA")
            .with_tags(["React", "Next.js", "Tailwind"]),
        Item::new("2", "UI/UX Designer", "Design")
            .with_location("Ghaziabad")
            .with_kind("Full-Time")
            .with_date("2025-09-20")
            .with_description("Figma & Adobe XD me modern designs create karna.")
            .with_byline("Senior")
            .with_figure("₹4-8 LPA")
            .with_tags(["Figma", "Prototyping"]),
        Item::new("3", "Digital Marketing Specialist", "Marketing")
            .with_location("Remote")
            .with_kind("Part-Time")
            .with_date("2025-09-18")
            .with_description("Social media campaigns aur SEO strategies manage karna.")
            .with_byline("Junior")
            .with_figure("₹2-4 LPA")
            .with_tags(["SEO", "Social Media"]),
        Item::new("4", "Backend Developer", "Engineering")
            .with_location("Noida")
            .with_kind("Full-Time")
            .with_date("2025-09-15")
            .with_description("Node.js & MongoDB based scalable APIs develop karna.")
            .with_byline("Mid")
            .with_figure("₹7-12 LPA")
            .with_tags(["Node.js", "MongoDB"]),
    ]
}

pub fn sample_posts() -> Vec<Item> {
    vec![
        Item::new("ai-trends", "AI Marketing Trends", "Marketing")
            .with_date("Sep 25, 2025")
            .with_byline("Vision Ads")
            .with_description("AI tools marketing ko next level le ja rahe hain..."),
        Item::new("nextjs-wordpress", "Next.js vs WordPress", "Web Dev")
            .with_date("Sep 20, 2025")
            .with_byline("Dev Team")
            .with_description("Pros & cons dono platforms ke..."),
        Item::new("short-videos", "Short Videos Growth", "Social Media")
            .with_date("Sep 10, 2025")
            .with_byline("Studio")
            .with_description("Reels aur shorts brand engagement boost karte hain..."),
        Item::new("design-systems", "Design Systems for Scale", "Design")
            .with_date("Aug 30, 2025")
            .with_byline("Design Team")
            .with_description("Startups ko design system kyun banana chahiye..."),
    ]
}

pub fn sample_portfolio() -> Vec<Item> {
    vec![
        Item::new("p1", "Brand Refresh — Luma Co.", "Branding")
            .with_description("Full brand identity, packaging & launch campaign.")
            .with_byline("+45% brand recall"),
        Item::new("p2", "E-commerce Growth — QuickCart", "Web")
            .with_description("Next.js store + CRO + paid ads funnel.")
            .with_byline("3x revenue in 3 months"),
        Item::new("p3", "Social Series — EatRight", "Social")
            .with_description("30 short-form videos + influencer seeding.")
            .with_byline("Avg CTR 6%"),
        Item::new("p4", "Cinematic Promo — Nova", "Video")
            .with_description("Cinematic product film, color graded & mixed.")
            .with_byline("Festival selection"),
        Item::new("p5", "UI Revamp — FinFlow", "Web")
            .with_description("Dashboard redesign with performance focus.")
            .with_byline("+20% retention"),
        Item::new("p6", "Motion Kit — Stellar", "Branding")
            .with_description("Animated logos, transitions & social templates.")
            .with_byline("Reusable kit for teams"),
    ]
}

//! Site copy: brand, navigation, home sections, FAQs, policies, about
//! and contact pages.
//!
//! All text is English and compiled in.

use crate::catalog::Category;

/// A labelled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> Link {
    Link { label, href }
}

/// A titled card: quality pillars, about-page values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A figure with a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub sub_tagline: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub whatsapp_label: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "Shahed Storee",
    tagline: "Timeless Furniture, Crafted for Modern Living",
    sub_tagline: "Discover premium furniture pieces that blend luxury craftsmanship with contemporary design, made for discerning Saudi homes.",
    address: "Madina, Kingdom of Saudi Arabia",
    phone: "+966 50 000 0000",
    email: "hello@shahedstoree.sa",
    whatsapp_label: "Chat on WhatsApp",
};

pub const NAV_LINKS: [Link; 4] = [
    link("Home", "/"),
    link("Shop", "/shop"),
    link("About", "/about"),
    link("FAQ", "/faq"),
];

pub const NAV_CTA: Link = link("Explore Collection", "/shop");

pub struct Hero {
    /// Lines of the headline.
    pub headline: [&'static str; 2],
    pub primary: Link,
    pub secondary: Link,
    pub badges: [&'static str; 3],
}

pub const HERO: Hero = Hero {
    headline: ["Timeless Furniture,", "Crafted for Modern Living"],
    primary: link("Explore Collection", "/shop"),
    secondary: link("Contact Us", "/contact"),
    badges: [
        "+30 Curated Pieces",
        "Fast Saudi Delivery",
        "Premium Materials",
    ],
};

/// Heading block used by several home sections.
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
}

pub const FEATURED_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Featured Collection",
    headline: "Our most popular pieces, handpicked for you",
    description: "Each piece in our signature collection is selected for its exceptional craftsmanship, material quality, and timeless appeal.",
};

pub const FEATURED_CTA: Link = link("Shop All Pieces", "/shop");

pub const COLLECTIONS_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Signature Collections",
    headline: "Find Your Perfect Piece",
    description: "",
};

/// Tabs of the home-page collections section, first is the default.
pub const COLLECTION_TABS: [Category; 3] = Category::ALL;

pub const MARQUEE_ITEMS: [&str; 8] = [
    "FURNITURE",
    "INTERIOR",
    "DESIGN",
    "LUXURY",
    "MADINA",
    "CRAFTSMANSHIP",
    "SAUDI ARABIA",
    "TIMELESS",
];

pub const ABOUT_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Our Story",
    headline: "Built on a Passion for Beautiful Living",
    description: "At Shahed Storee, we believe your home deserves furniture as unique as you are. Founded in the heart of Saudi Arabia, we curate premium furniture pieces that marry timeless design with contemporary sensibility.\n\nEvery piece in our collection is hand-selected for material quality, durability, and aesthetic excellence, ensuring your investment lasts a lifetime.",
};

pub const ABOUT_STATS: [Stat; 3] = [
    Stat { value: "30+", label: "Curated Pieces" },
    Stat { value: "100%", label: "Premium Materials" },
    Stat { value: "KSA-Wide", label: "Delivery Coverage" },
];

pub const QUALITY_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Our Commitment",
    headline: "Eco-Friendly Designs, Timeless Quality",
    description: "We partner with manufacturers who share our values: sustainable sourcing, ethical production and uncompromising quality standards.",
};

pub const QUALITY_PILLARS: [Card; 3] = [
    Card {
        icon: "🌿",
        title: "Sustainable Materials",
        description: "Responsibly sourced wood, natural fabrics, and eco-conscious finishes.",
    },
    Card {
        icon: "🏆",
        title: "Premium Craftsmanship",
        description: "Every joint, stitch, and finish is held to the highest standard.",
    },
    Card {
        icon: "🚛",
        title: "White Glove Delivery",
        description: "We deliver and set up your furniture with care across Saudi Arabia.",
    },
];

/// Questions shown on the home page, the first entries of [`FAQS`].
pub const FAQ_PREVIEW_LEN: usize = 4;

pub static FAQS: [Faq; 8] = [
    Faq {
        question: "Do you deliver across Saudi Arabia?",
        answer: "Yes, we deliver to all major cities in Saudi Arabia. Delivery times vary by area, so contact us on WhatsApp for your specific location.",
    },
    Faq {
        question: "Can I see the furniture before buying?",
        answer: "We currently operate online only. All product images are high-quality and accurately represent the pieces. Contact us for more photos or videos of any item.",
    },
    Faq {
        question: "What materials do you use?",
        answer: "Our collection features premium materials including Italian leather, solid hardwood, sintered stone, and high-grade fabric upholstery.",
    },
    Faq {
        question: "How do I place an order?",
        answer: "Simply chat with us on WhatsApp! Select your desired piece, choose your variants, and we'll guide you through the order and delivery process.",
    },
    Faq {
        question: "What is your return policy?",
        answer: "We accept returns within 7 days of delivery if the item is in original condition. Custom or made-to-order pieces are non-returnable. See our full Returns Policy for details.",
    },
    Faq {
        question: "Do you offer custom sizes or fabrics?",
        answer: "Many of our pieces are available in custom sizes and fabric options. Please contact us on WhatsApp to discuss customization options and lead times.",
    },
    Faq {
        question: "How long does delivery take?",
        answer: "Standard delivery within Madina takes 3–5 business days. Delivery to other cities varies from 5–10 business days. We'll confirm the timeline when you order.",
    },
    Faq {
        question: "Are prices negotiable?",
        answer: "Our prices are fixed and reflect the premium quality of our pieces. However, we occasionally run seasonal promotions. Follow us on social media to stay updated.",
    },
];

pub fn faq_preview() -> &'static [Faq] {
    &FAQS[..FAQ_PREVIEW_LEN]
}

pub struct CtaBanner {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub label: &'static str,
}

/// The banner's button opens a WhatsApp chat.
pub const CTA_BANNER: CtaBanner = CtaBanner {
    headline: "Let's Create Your Dream Living Space",
    subheadline: "Chat with our furniture experts on WhatsApp and get personalized recommendations for your home.",
    label: "Start the Conversation",
};

pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_DESCRIPTION: &str =
    "Premium furniture curated for modern Saudi living. Timeless pieces, exceptional quality.";

const QUICK_LINKS: [Link; 4] = [
    link("Shop", "/shop"),
    link("About", "/about"),
    link("Contact", "/contact"),
    link("FAQ", "/faq"),
];

const POLICY_LINKS: [Link; 4] = [
    link("Shipping Policy", "/policies?section=shipping#shipping"),
    link("Return Policy", "/policies?section=returns#returns"),
    link("Privacy Policy", "/policies?section=privacy#privacy"),
    link("Terms & Conditions", "/policies?section=terms#terms"),
];

pub static FOOTER_SECTIONS: [FooterSection; 2] = [
    FooterSection {
        title: "Quick Links",
        links: &QUICK_LINKS,
    },
    FooterSection {
        title: "Policies",
        links: &POLICY_LINKS,
    },
];

pub const SOCIAL_LINKS: [Link; 3] = [
    link("Instagram", "https://instagram.com/shahedstoree"),
    link("TikTok", "https://tiktok.com/@shahedstoree"),
    link("Snapchat", "https://snapchat.com/add/shahedstoree"),
];

/// `© 2026 Shahed Storee. All rights reserved.`
pub fn copyright(year: i32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

pub struct AboutPage {
    pub headline: &'static str,
    pub body: [&'static str; 3],
    pub values: [Card; 4],
}

pub const ABOUT_PAGE: AboutPage = AboutPage {
    headline: "Crafting Beautiful Spaces, One Piece at a Time",
    body: [
        "Shahed Storee was born from a simple belief: everyone deserves a home that feels both luxurious and personal. Founded in Madina, we set out to bring world-class furniture to Saudi homemakers, pieces that tell a story, built to last generations.",
        "Our team personally curates every item in our collection, working directly with manufacturers who share our commitment to quality, sustainability, and ethical production. From Italian leather sofas to hand-carved dining tables, each piece carries the mark of true craftsmanship.",
        "We are proud to serve customers across Saudi Arabia, delivering premium furniture with the care and attention it deserves.",
    ],
    values: [
        Card {
            icon: "✦",
            title: "Quality First",
            description: "Every piece is vetted for materials, construction, and longevity before it earns a place in our collection.",
        },
        Card {
            icon: "🌍",
            title: "Sustainability",
            description: "We prioritize responsibly sourced materials and eco-conscious manufacturing partners.",
        },
        Card {
            icon: "🤝",
            title: "Customer Focus",
            description: "Your satisfaction is our measure of success. We're always here on WhatsApp to help.",
        },
        Card {
            icon: "🏠",
            title: "Saudi Heritage",
            description: "Proudly serving the Kingdom. Our designs respect both modern tastes and traditional values.",
        },
    ],
};

pub struct ContactPage {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub form_title: &'static str,
    pub submit: &'static str,
    pub disclaimer: &'static str,
    pub hours: &'static str,
}

pub const CONTACT_PAGE: ContactPage = ContactPage {
    headline: "Get in Touch",
    subheadline: "Have a question? Want to see more photos? Ready to order? We're just a message away.",
    form_title: "Send us a message",
    submit: "Send via WhatsApp",
    disclaimer: "Your message opens in WhatsApp, nothing is stored on our side.",
    hours: "Sat–Thu, 9 AM – 9 PM (KSA)",
};

/// Delivery areas offered on the product page, in display order.
pub const SAUDI_AREAS: [&str; 11] = [
    "Madina",
    "Jeddah",
    "Dammam",
    "Makkah",
    "Madinah",
    "Khobar",
    "Taif",
    "Abha",
    "Tabuk",
    "Qassim",
    "Other area",
];

/// One policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Anchor and `section` parameter value.
    pub key: &'static str,
    /// Sidebar label.
    pub label: &'static str,
    pub title: &'static str,
    /// Lightly marked-up text, see [`parse_policy`].
    pub body: &'static str,
}

pub static POLICIES: [Policy; 4] = [
    Policy {
        key: "shipping",
        label: "Shipping",
        title: "Shipping Policy",
        body: "**Delivery Areas**\nWe deliver across Saudi Arabia, including Madina, Jeddah, Dammam, Makkah, Madinah, and other cities.\n\n**Delivery Times**\n- Madina: 3–5 business days\n- Major cities: 5–7 business days\n- Remote areas: 7–14 business days\n\n**Delivery Fees**\nDelivery fees vary by location and order size. Final delivery cost is confirmed at time of order via WhatsApp.\n\n**White Glove Service**\nOur team delivers and assembles furniture in your home at no extra charge within Madina.",
    },
    Policy {
        key: "returns",
        label: "Returns",
        title: "Return Policy",
        body: "**Return Window**\nWe accept returns within 7 days of delivery for items in original, unused condition.\n\n**Conditions**\n- Item must be in original packaging or returned without damage\n- Custom and made-to-order items are non-returnable\n- Assembly and delivery fees are non-refundable\n\n**How to Return**\nContact us on WhatsApp to initiate a return. We will arrange pickup at a time convenient for you.\n\n**Refunds**\nRefunds are processed within 5–10 business days after item inspection.",
    },
    Policy {
        key: "privacy",
        label: "Privacy",
        title: "Privacy Policy",
        body: "**Data We Collect**\nWe collect your name, phone number, and order details as provided through WhatsApp.\n\n**How We Use Your Data**\nYour information is used solely to process and deliver your orders. We do not sell or share your data with third parties.\n\n**WhatsApp Communication**\nBy contacting us via WhatsApp, you consent to communication through this platform for order-related purposes.\n\n**Contact**\nFor privacy concerns, contact us at hello@shahedstoree.sa",
    },
    Policy {
        key: "terms",
        label: "Terms",
        title: "Terms & Conditions",
        body: "**1. Orders**\nAll orders are placed via WhatsApp and confirmed by our team. An order is binding upon confirmation of payment.\n\n**2. Pricing**\nAll prices are listed in SAR (Saudi Riyal) and include VAT. Prices are subject to change without notice.\n\n**3. Payment**\nPayment details are provided at time of order confirmation via WhatsApp.\n\n**4. Liability**\nShahed Storee is not liable for delays caused by circumstances beyond our control, including customs, natural events, or logistics disruptions.\n\n**5. Governing Law**\nThese terms are governed by the laws of the Kingdom of Saudi Arabia.",
    },
];

/// Look a policy up by key; unknown keys give the first (shipping).
pub fn policy(key: &str) -> &'static Policy {
    POLICIES.iter().find(|p| p.key == key).unwrap_or(&POLICIES[0])
}

/// A run of text inside a policy paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Text(&'a str),
    Strong(&'a str),
}

/// One line of a policy body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyBlock<'a> {
    /// A line wrapped entirely in `**`.
    Heading(&'a str),
    /// A line starting with `- `.
    Item(&'a str),
    /// An empty line.
    Break,
    Paragraph(Vec<Inline<'a>>),
}

/// Split a policy body into blocks, one per line.
pub fn parse_policy(body: &str) -> Vec<PolicyBlock<'_>> {
    body.split('\n').map(parse_policy_line).collect()
}

fn parse_policy_line(line: &str) -> PolicyBlock<'_> {
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return PolicyBlock::Heading(&line[2..line.len() - 2]);
    }
    if let Some(item) = line.strip_prefix("- ") {
        return PolicyBlock::Item(item);
    }
    if line.is_empty() {
        return PolicyBlock::Break;
    }
    PolicyBlock::Paragraph(parse_inline(line))
}

/// `**x**` spans become strong; an unmatched `**` is kept as text.
fn parse_inline(line: &str) -> Vec<Inline<'_>> {
    let mut parts = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            parts.push(Inline::Text(&rest[..open]));
        }
        parts.push(Inline::Strong(&after[..close]));
        rest = &after[close + 2..];
    }
    if !rest.is_empty() {
        parts.push(Inline::Text(rest));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_preview_is_first_four() {
        assert_eq!(faq_preview().len(), 4);
        assert_eq!(faq_preview()[3].question, "How do I place an order?");
        assert_eq!(FAQS.len(), 8);
    }

    #[test]
    fn test_policy_lookup_defaults_to_shipping() {
        assert_eq!(policy("privacy").title, "Privacy Policy");
        assert_eq!(policy("nope").key, "shipping");
    }

    #[test]
    fn test_parse_policy_blocks() {
        let blocks = parse_policy("**Conditions**\n- Item intact\n\nRefunds take **5 days** max");
        assert_eq!(
            blocks,
            vec![
                PolicyBlock::Heading("Conditions"),
                PolicyBlock::Item("Item intact"),
                PolicyBlock::Break,
                PolicyBlock::Paragraph(vec![
                    Inline::Text("Refunds take "),
                    Inline::Strong("5 days"),
                    Inline::Text(" max"),
                ]),
            ]
        );
    }

    #[test]
    fn test_unmatched_bold_marker_is_text() {
        assert_eq!(
            parse_policy("a ** b"),
            vec![PolicyBlock::Paragraph(vec![Inline::Text("a ** b")])]
        );
    }

    #[test]
    fn test_every_policy_starts_with_heading() {
        for p in POLICIES.iter() {
            assert!(matches!(parse_policy(p.body)[0], PolicyBlock::Heading(_)), "{}", p.key);
        }
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright(2026, BRAND.name),
            "© 2026 Shahed Storee. All rights reserved."
        );
        assert_eq!(copyright(2027, "Acme Home"), "© 2027 Acme Home. All rights reserved.");
    }
}

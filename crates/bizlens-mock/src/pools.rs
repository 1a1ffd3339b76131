//! Fixed option lists the generator draws from.

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Avery", "Jordan", "Maya", "Luis", "Priya", "Sam", "Grace", "Omar", "Elena", "Marcus",
    "Hannah", "Kenji", "Tessa", "Andre", "Nadia", "Connor", "Rosa", "Victor", "Leah", "Dmitri",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Nguyen", "Garcia", "Patel", "Thompson", "Okafor", "Schmidt", "Rossi", "Kim", "Walsh",
    "Hernandez", "Cohen", "Baker", "Ivanova", "Mensah", "Brooks", "Tanaka", "Silva", "Murphy",
];

pub(crate) const EMAIL_DOMAINS: &[&str] =
    &["gmail.com", "outlook.com", "yahoo.com", "icloud.com", "proton.me"];

pub(crate) const CUSTOMER_TAGS: &[&str] = &[
    "vip",
    "repeat",
    "new",
    "at-risk",
    "referral",
    "corporate",
    "seasonal",
    "loyalty-member",
];

pub(crate) const INTERACTION_SUMMARIES: &[&str] = &[
    "Asked about availability next week",
    "Requested a quote for additional work",
    "Followed up on an unpaid invoice",
    "Wanted to reschedule an appointment",
    "Shared feedback after their last visit",
    "Asked whether gift cards can be combined",
    "Reported a problem with an online booking",
    "Inquired about membership pricing",
];

pub(crate) const COMPLAINT_DESCRIPTIONS: &[&str] = &[
    "Waited over forty minutes past the scheduled time with no update.",
    "Was charged more than the quoted price without explanation.",
    "Staff member was dismissive when the issue was raised.",
    "Work had to be redone because it was not finished properly.",
    "Facilities were not clean on arrival.",
    "Booking confirmation never arrived and the slot was given away.",
    "Product quality was noticeably worse than previous visits.",
];

pub(crate) const POSITIVE_REVIEWS: &[&str] = &[
    "Excellent service from start to finish, would recommend to anyone.",
    "Friendly staff and great quality. We keep coming back.",
    "Fast, professional and fairly priced. Best in the area.",
    "Loved the attention to detail. Five stars.",
];

pub(crate) const NEUTRAL_REVIEWS: &[&str] = &[
    "Decent experience overall, a few things could be smoother.",
    "Got what we paid for. Nothing special, nothing bad.",
    "Service was fine but the wait was longer than expected.",
];

pub(crate) const NEGATIVE_REVIEWS: &[&str] = &[
    "Terrible communication and the job was late. Would not return.",
    "Rude staff and overpriced. Very disappointed.",
    "Worst experience we have had, nobody followed up on our complaint.",
    "Dirty, slow and the quality has gone downhill.",
];

pub(crate) const COMPETITOR_PREFIXES: &[&str] = &[
    "Premier", "Metro", "Golden", "Summit", "Blue Ribbon", "Main Street", "Riverside", "Elite",
    "Hometown", "Apex",
];

pub(crate) const STRENGTHS: &[&str] = &[
    "Fast response times",
    "Aggressive introductory pricing",
    "Strong loyalty program",
    "Large review volume",
    "Prime location with parking",
    "Active social media presence",
    "Extended weekend hours",
];

pub(crate) const WEAKNESSES: &[&str] = &[
    "Inconsistent service quality",
    "Slow complaint handling",
    "Limited online booking",
    "Frequent staff turnover",
    "Hidden fees mentioned in reviews",
    "Outdated website",
    "Long wait times at peak hours",
];

pub(crate) const COMPETITOR_COMPLAINTS: &[&str] = &[
    "Waited an hour and nobody apologized.",
    "They tacked on fees that were never mentioned.",
    "Manager refused to fix an obvious mistake.",
    "Place was filthy, will not be back.",
    "Quality has dropped a lot since last year.",
    "Could never get anyone on the phone.",
];

pub(crate) const STREETS: &[&str] = &[
    "Main St", "Broadway", "Oak Ave", "Market St", "Park Pl", "2nd Ave", "Elm St", "Lake Rd",
];

/// Insight templates: `(title, description)`. Placeholders: `{name}`,
/// `{zip}`, `{pct}`, `{count}`, `{industry}`.
pub(crate) const INSIGHT_TEMPLATES: &[(&str, &str)] = &[
    (
        "Competitors are slow to answer complaints",
        "{pct}% of negative reviews for {industry} near {zip} never get a reply. Responding within a day could win over unhappy customers looking elsewhere.",
    ),
    (
        "Weekend demand outpaces supply",
        "Searches for {industry} around {zip} spike {pct}% on weekends while {count} nearby rivals keep reduced hours.",
    ),
    (
        "Price is the top complaint in your area",
        "{pct}% of complaints about local competitors mention pricing. {name} can stand out with transparent quotes.",
    ),
    (
        "Review velocity gap",
        "The top {count} competitors collect new reviews {pct}% faster than {name}. A post-visit review request would close the gap.",
    ),
    (
        "Loyal customers are under-rewarded",
        "Repeat customers account for {pct}% of revenue but only {count} competitors run a loyalty program.",
    ),
    (
        "Cleanliness mentions are rising",
        "Mentions of cleanliness in {industry} reviews near {zip} are up {pct}% this quarter.",
    ),
];

pub(crate) const OPPORTUNITY_TEMPLATES: &[(&str, &str)] = &[
    (
        "Launch a membership plan",
        "Recurring plans convert {pct}% of repeat visitors in comparable markets.",
    ),
    (
        "Capture dissatisfied competitor customers",
        "{count} recent one-star reviews of nearby rivals mention switching providers.",
    ),
    (
        "Add online booking",
        "{pct}% of local searches happen after business hours.",
    ),
    (
        "Partner with neighboring businesses",
        "Cross-promotions with {count} complementary businesses near {zip}.",
    ),
    (
        "Promote off-peak pricing",
        "Weekday capacity sits {pct}% below weekend levels.",
    ),
];

pub(crate) const THREAT_TEMPLATES: &[(&str, &str)] = &[
    (
        "{competitor} is undercutting prices",
        "Introductory offers {pct}% below the local average.",
    ),
    (
        "{competitor} review surge",
        "{count} new five-star reviews in the last month.",
    ),
    (
        "{competitor} expanding hours",
        "Now open {count} extra hours per week, overlapping your peak.",
    ),
    (
        "New entrant near {zip}",
        "A new location is opening within two miles.",
    ),
];

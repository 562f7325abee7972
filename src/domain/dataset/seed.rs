//! Fixed seed material for the support chatbot dataset.
//!
//! Every string may contain a `{brand}` placeholder that is replaced with the
//! configured brand name when pairs are generated.

/// Placeholder substituted with the brand name.
pub const BRAND_PLACEHOLDER: &str = "{brand}";

/// A canonical question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A topic with parallel question and answer lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub tag: &'static str,
    pub questions: &'static [&'static str],
    pub answers: &'static [&'static str],
}

const fn seed(question: &'static str, answer: &'static str) -> SeedPair {
    SeedPair { question, answer }
}

/// Canonical pairs, always emitted first and verbatim.
pub const CANONICAL: [SeedPair; 13] = [
    seed(
        "What is {brand}?",
        "{brand} is a subscription platform created for UiT SE ADBMS Course (CS-7313). Project created by Wint War Shwe Yee, Naw Lal Yee Than Han, Chaw Su Han, Kaung Myat Thu, Kaung Kyaw Han. It provides dashboards for readers, creators, and admins with monthly membership, premium content gating, bookmarks, and a rich content editor.",
    ),
    seed(
        "Who created {brand}?",
        "{brand} was created for UiT SE ADBMS Course (CS-7313) by Wint War Shwe Yee, Naw Lal Yee Than Han, Chaw Su Han, Kaung Myat Thu, Kaung Kyaw Han.",
    ),
    seed(
        "Who built project {brand}?",
        "Project {brand} is a subscription platform created for UiT SE ADBMS Course (CS-7313) by Wint War Shwe Yee, Naw Lal Yee Than Han, Chaw Su Han, Kaung Myat Thu, Kaung Kyaw Han.",
    ),
    seed(
        "Tell me about project {brand}.",
        "{brand} is a subscription platform created for UiT SE ADBMS Course (CS-7313). Project created by Wint War Shwe Yee, Naw Lal Yee Than Han, Chaw Su Han, Kaung Myat Thu, Kaung Kyaw Han, featuring monthly membership, premium gating, and creator tools.",
    ),
    seed(
        "How do I upgrade to Premium on {brand}?",
        "From the reader dashboard, click Upgrade to Premium. This starts checkout for the monthly membership. Once active, you can read all premium stories without the blur gate.",
    ),
    seed(
        "How do I manage billing on {brand}?",
        "Use the Manage Billing button in the Membership tab of your reader dashboard. It opens the billing portal to update payment methods or cancel your plan.",
    ),
    seed(
        "How does premium content gating work on {brand}?",
        "Premium stories show a preview and then display a blur gate with an Upgrade prompt. Premium members can view the full content immediately.",
    ),
    seed(
        "Where can I find my bookmarks on {brand}?",
        "Open your reader dashboard and go to the Bookmarks tab. All saved articles appear there with quick actions.",
    ),
    seed(
        "I'm a creator. Can I view other creators' content on {brand}?",
        "Yes. Creators have an active membership and can browse and read other creators' premium content like any member.",
    ),
    seed(
        "How do I write a new post on {brand}?",
        "From the Creator Dashboard, click Write New Post. You will be taken to the rich content editor where you can compose and publish.",
    ),
    seed(
        "Does {brand} support dark mode?",
        "Yes. The site uses a theme provider and adapts to your system preference. You can also toggle the theme from the dashboard header.",
    ),
    seed(
        "How can admins moderate content on {brand}?",
        "Admins can approve, remove, or review reported content from the Admin Dashboard under the Content Moderation tab.",
    ),
    seed(
        "How do I update my profile on {brand}?",
        "Click Profile in the reader dashboard header to open Profile Settings and edit your name, email, bio, and newsletter preferences.",
    ),
];

/// Topic tables expanded round-robin after the canonical pairs.
pub const TOPICS: [Topic; 8] = [
    Topic {
        tag: "membership",
        questions: &[
            "How much does {brand} Premium cost per month?",
            "Is there a free plan on {brand}?",
            "Can I cancel {brand} membership anytime?",
            "Does {brand} offer a student discount?",
            "How do I switch plans on {brand}?",
            "What happens if my {brand} payment fails?",
            "Is billing handled securely on {brand}?",
        ],
        answers: &[
            "Premium is a monthly membership. Pricing is shown during checkout and managed via the billing portal.",
            "Yes. You can use {brand} on a free tier, but premium stories are gated until you upgrade.",
            "Yes. Use Manage Billing in your dashboard to cancel. Access continues until the end of the billing period.",
            "Discounts may be offered during promotions. Check the pricing page or billing portal for details.",
            "Use Manage Billing to change plans. Your new plan applies after confirmation in the portal.",
            "If a payment fails, the billing portal will guide you to update your method and retry.",
            "Yes. {brand} uses a PCI-compliant payment processor, and the customer portal handles secure updates.",
        ],
    },
    Topic {
        tag: "premium_gating",
        questions: &[
            "Why is my article blurred on {brand}?",
            "How do I read the full premium story on {brand}?",
            "Can I preview premium articles on {brand}?",
            "Does {brand} remember my premium status across devices?",
        ],
        answers: &[
            "Blur indicates premium content. Upgrade to Premium to remove the gate and read fully.",
            "Upgrade to Premium from your dashboard to unlock the full content instantly.",
            "Yes. Premium stories show a partial preview before the Upgrade prompt.",
            "Yes. Once signed in, your membership is recognized across devices.",
        ],
    },
    Topic {
        tag: "reader_dashboard",
        questions: &[
            "Where is the Bookmarks tab in {brand}?",
            "How do I save an article to bookmarks on {brand}?",
            "How do I share an article from {brand}?",
            "What stats do I see as a reader on {brand}?",
        ],
        answers: &[
            "Open your dashboard and select the Bookmarks tab to view saved articles.",
            "Click the bookmark icon on an article card or detail page to save it.",
            "Use the Share button on cards to share via your device's native share menu.",
            "Reader stats include articles read, reading time, bookmarks count, and subscriptions.",
        ],
    },
    Topic {
        tag: "creator_dashboard",
        questions: &[
            "How do I become a creator on {brand}?",
            "Is there a creator activation fee on {brand}?",
            "Can creators schedule posts on {brand}?",
            "How do I edit or delete a post on {brand}?",
        ],
        answers: &[
            "Click Become a Creator from your dashboard. Complete the activation to enable creator tools.",
            "Yes, there is a one-time activation fee shown during upgrade.",
            "Yes. Use the Schedule Post option from the Posts tab in your Creator Dashboard.",
            "Open the post in the Creator Dashboard and choose Edit or Delete from the post actions.",
        ],
    },
    Topic {
        tag: "admin",
        questions: &[
            "How do admins review reported content on {brand}?",
            "Can admins ban a user on {brand}?",
            "Does {brand} provide platform analytics for admins?",
        ],
        answers: &[
            "From the Admin Dashboard, open Content Moderation to approve, remove, or review reports.",
            "Yes. Admins can take actions like suspend or ban via the user management tools.",
            "Yes. The Admin Dashboard shows platform stats and revenue analytics.",
        ],
    },
    Topic {
        tag: "navigation_ui",
        questions: &[
            "How do I change themes on {brand}?",
            "What is the sidebar navigation in {brand}?",
            "Where do I find settings in {brand}?",
        ],
        answers: &[
            "Use the Theme Toggle in the header to switch between light and dark modes.",
            "The sidebar provides quick access to Discover, Library, Subscriptions, and role-specific tools.",
            "Open the dashboard header menu or the sidebar Settings item to access preferences.",
        ],
    },
    Topic {
        tag: "chatbot",
        questions: &[
            "What can the {brand} chatbot help me with?",
            "How do I open the chatbot on {brand}?",
        ],
        answers: &[
            "It assists with content creation tips, billing, membership, analytics, and navigation.",
            "Click Help in the header or the floating Chatbot button to open the assistant.",
        ],
    },
    Topic {
        tag: "tech",
        questions: &[
            "What tech stack does {brand} use?",
            "Does {brand} support mobile devices?",
            "Why did I see a hydration warning on {brand}?",
        ],
        answers: &[
            "{brand} uses Next.js with React, Tailwind, and a component system for the UI.",
            "Yes. The layout and sidebar are responsive and optimized for mobile.",
            "Hydration warnings can occur if client-only state differs from SSR. Refreshing and avoiding client-only reads during SSR resolves it.",
        ],
    },
];

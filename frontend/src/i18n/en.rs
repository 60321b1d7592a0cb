pub mod common {
    pub const ARROW_RIGHT: &str = "→";
    pub const REQUIRED_MARK: &str = "*";
}

pub mod header {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_BLOG: &str = "Blog";
    pub const NAV_ABOUT: &str = "About";
    pub const NAV_CONTACT: &str = "Contact";
    pub const OPEN_MENU: &str = "Open menu";
    pub const CLOSE_MENU: &str = "Close menu";
}

pub mod footer {
    pub const TAGLINE: &str =
        "Discover insightful articles and stories from writers around the world.";
    pub const QUICK_LINKS: &str = "Quick Links";
    pub const CATEGORIES: &str = "Categories";
    pub const NEWSLETTER_TITLE: &str = "Newsletter";
    pub const NEWSLETTER_TEXT: &str =
        "Subscribe to get our latest articles delivered to your inbox.";
    pub const NEWSLETTER_PLACEHOLDER: &str = "Enter your email";
    pub const SUBSCRIBE: &str = "Subscribe";
    pub const SUBSCRIBED_TITLE: &str = "Subscribed!";
    pub const SUBSCRIBED_TEMPLATE: &str = "We'll send new articles to {}.";
    pub const COPYRIGHT_TEMPLATE: &str = "© {}. All rights reserved.";
}

pub mod notice {
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREVIOUS: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "Go to page {}";
}

pub mod article_card {
    pub const READ_MORE: &str = "Read More";
    pub const FEATURED: &str = "Featured";
}

pub mod like_button {
    pub const ARIA_LIKE: &str = "Like this article";
    pub const ARIA_UNLIKE: &str = "Remove like";
}

pub mod comments {
    pub const LEAVE_COMMENT: &str = "Leave a Comment";
    pub const NAME_PLACEHOLDER: &str = "Your Name";
    pub const EMAIL_PLACEHOLDER: &str = "Your Email";
    pub const CONTENT_PLACEHOLDER: &str = "Write your comment here...";
    pub const POST: &str = "Post Comment";
    pub const MISSING_TEXT: &str = "Please fill in all fields before submitting.";
    pub const POSTED_TITLE: &str = "Comment posted!";
    pub const POSTED_TEXT: &str = "Your comment has been successfully added.";
    pub const EMPTY: &str = "No comments yet. Be the first to comment!";
}

pub mod home {
    pub const HERO_TITLE: &str = "Welcome to Inkscribe";
    pub const HERO_SUBTITLE: &str =
        "Discover insightful articles and stories from writers around the world";
    pub const EXPLORE: &str = "Explore Articles";
    pub const LEARN_MORE: &str = "Learn More";
    pub const FEATURED_TITLE: &str = "Featured Story";
    pub const RECENT_TITLE: &str = "Recent Articles";
    pub const VIEW_ALL: &str = "View All";
    pub const CATEGORIES_TITLE: &str = "Explore Categories";
    pub const CATEGORY_COUNT_TEMPLATE: &str = "{} articles";
    pub const STATS: [(&str, &str); 3] = [
        ("1,000+", "Articles Published"),
        ("50,000+", "Active Readers"),
        ("4.9/5", "Reader Satisfaction"),
    ];
}

pub mod blog {
    pub const TITLE: &str = "Blog Articles";
    pub const SUBTITLE: &str = "Explore our collection of insightful articles";
    pub const SEARCH_PLACEHOLDER: &str = "Search articles...";
    pub const CATEGORIES_ARIA: &str = "Filter by category";
    pub const TAGS_ARIA: &str = "Popular tags";
    pub const NO_RESULTS: &str = "No articles found matching your criteria";
    pub const CLEAR_FILTERS: &str = "Clear Filters";
    pub const UNKNOWN_CATEGORY_TEMPLATE: &str = "Unknown category `{}`, showing all articles";
}

pub mod blog_detail {
    pub const BACK: &str = "Back to Blog";
    pub const NOT_FOUND_TITLE: &str = "Post Not Found";
    pub const NOT_FOUND_TEXT: &str = "The article you're looking for doesn't exist.";
    pub const TAGS: &str = "Tags";
    pub const RELATED_TITLE: &str = "Related Articles";
}

pub mod about {
    pub const TITLE: &str = "About Inkscribe";
    pub const SUBTITLE: &str = "We're on a mission to share knowledge, inspire creativity, and \
                                connect writers with readers worldwide.";
    pub const STORY_TITLE: &str = "Our Story";
    pub const STORY: [&str; 3] = [
        "Founded in 2020, Inkscribe began as a simple blog but quickly evolved into a thriving \
         platform for writers and readers alike. We believe in the power of words to educate, \
         inspire, and transform lives.",
        "Our platform hosts diverse voices from around the globe, covering topics from \
         technology and design to lifestyle and culture. Every article is carefully curated to \
         ensure quality and value for our readers.",
        "Today, we're proud to be home to thousands of articles that have been read by millions \
         worldwide. But we're just getting started on our journey to democratize knowledge \
         sharing.",
    ];
    pub const STORY_IMAGE: &str =
        "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=600&h=400&fit=crop";
    pub const IMPACT_TITLE: &str = "Our Impact";
    pub const STATS: [(&str, &str); 3] = [
        ("1000+", "Articles Published"),
        ("50K+", "Active Readers"),
        ("15+", "Awards Won"),
    ];
    pub const TEAM_TITLE: &str = "Meet Our Team";
    /// (name, role, bio)
    pub const TEAM: [(&str, &str, &str); 3] = [
        (
            "Sarah Johnson",
            "Editor in Chief",
            "Leading editorial strategy with 10+ years of experience in digital publishing.",
        ),
        (
            "Michael Chen",
            "Creative Director",
            "Crafting visual narratives that complement our written content.",
        ),
        (
            "Emily Rodriguez",
            "Content Strategist",
            "Ensuring our content reaches and resonates with the right audience.",
        ),
    ];
    pub const VALUES_TITLE: &str = "Our Values";
    pub const VALUES: [(&str, &str); 4] = [
        (
            "Quality First",
            "We prioritize quality over quantity, ensuring every article provides genuine value \
             to our readers.",
        ),
        (
            "Diverse Voices",
            "We celebrate diversity in perspectives, backgrounds, and experiences to enrich our \
             content.",
        ),
        (
            "Continuous Learning",
            "We foster a culture of continuous learning, both for our team and our community.",
        ),
        (
            "Community Focus",
            "We build and nurture a supportive community where ideas can flourish and grow.",
        ),
    ];
    pub const CTA_TITLE: &str = "Join Our Journey";
    pub const CTA_TEXT: &str = "Whether you're a writer looking to share your ideas or a reader \
                                seeking inspiration, there's a place for you at Inkscribe.";
    pub const CTA_BUTTON: &str = "Get in Touch";
}

pub mod contact {
    pub const TITLE: &str = "Get in Touch";
    pub const SUBTITLE: &str =
        "Have a question or want to collaborate? We'd love to hear from you.";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const ADDRESS: &str = "Address";
    pub const FORM_TITLE: &str = "Send us a Message";
    pub const NAME_LABEL: &str = "Name";
    pub const EMAIL_LABEL: &str = "Email";
    pub const SUBJECT_LABEL: &str = "Subject";
    pub const MESSAGE_LABEL: &str = "Message";
    pub const NAME_PLACEHOLDER: &str = "John Doe";
    pub const EMAIL_PLACEHOLDER: &str = "john@example.com";
    pub const SUBJECT_PLACEHOLDER: &str = "What's this about?";
    pub const MESSAGE_PLACEHOLDER: &str = "Tell us what's on your mind...";
    pub const SEND: &str = "Send Message";
    pub const MISSING_TEXT: &str = "Please fill in all required fields.";
    pub const SENT_TITLE: &str = "Message sent!";
    pub const SENT_TEXT: &str = "We'll get back to you as soon as possible.";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page Not Found";
    pub const TEXT: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to Home";
}

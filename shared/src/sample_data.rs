//! Compiled-in sample content: six articles and a handful of comments.

use crate::{Article, Comment};

struct SampleArticle {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image: &'static str,
    author: &'static str,
    author_avatar: &'static str,
    date: &'static str,
    read_time: &'static str,
    likes: u32,
    comments: u32,
    tags: &'static [&'static str],
    featured: bool,
    category: &'static str,
}

impl From<&SampleArticle> for Article {
    fn from(sample: &SampleArticle) -> Self {
        Article {
            id: sample.id.to_string(),
            title: sample.title.to_string(),
            excerpt: sample.excerpt.to_string(),
            content: sample.content.to_string(),
            image: sample.image.to_string(),
            author: sample.author.to_string(),
            author_avatar: sample.author_avatar.to_string(),
            date: sample.date.to_string(),
            read_time: sample.read_time.to_string(),
            likes: sample.likes,
            comments: sample.comments,
            tags: sample.tags.iter().map(|tag| tag.to_string()).collect(),
            featured: sample.featured,
            category: sample.category.to_string(),
        }
    }
}

/// The six sample articles, newest first.
pub fn sample_articles() -> Vec<Article> {
    SAMPLE_ARTICLES.iter().map(Article::from).collect()
}

/// Comments shown under every article before a visitor adds their own.
pub fn sample_comments() -> Vec<Comment> {
    [
        (
            "1",
            "John Doe",
            "John",
            "Great article! I've been looking for a comprehensive guide on this topic. The \
             examples really helped clarify the concepts.",
            "Jan 15, 2024",
        ),
        (
            "2",
            "Jane Smith",
            "Jane",
            "This is exactly what I needed. Your writing style makes complex topics easy to \
             understand. Looking forward to more posts!",
            "Jan 14, 2024",
        ),
        (
            "3",
            "Robert Brown",
            "Robert",
            "I appreciate the practical approach you've taken here. It's refreshing to see \
             real-world applications instead of just theory.",
            "Jan 13, 2024",
        ),
    ]
    .into_iter()
    .map(|(id, author, avatar_seed, content, date)| Comment {
        id: id.to_string(),
        author: author.to_string(),
        avatar: crate::comments::avatar_url(avatar_seed),
        content: content.to_string(),
        date: date.to_string(),
    })
    .collect()
}

const SAMPLE_ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        id: "1",
        title: "The Future of Web Development: Trends to Watch in 2024",
        excerpt: "Explore the cutting-edge technologies and methodologies shaping the future of web development, from AI integration to WebAssembly.",
        content: r#"# The Future of Web Development: Trends to Watch in 2024

The landscape of web development is evolving at an unprecedented pace. As we move through 2024, several key trends are emerging that will shape how we build and interact with web applications.

## AI-Powered Development

Artificial Intelligence is no longer just a buzzword—it's becoming an integral part of the development process. From code completion to automated testing, AI tools are revolutionizing how developers work.

### Key Applications:
- **Intelligent Code Completion**: Tools like GitHub Copilot are becoming more sophisticated
- **Automated Bug Detection**: AI can now identify potential issues before they reach production
- **Performance Optimization**: Machine learning algorithms can suggest performance improvements

## WebAssembly Goes Mainstream

WebAssembly (WASM) is breaking down the barriers between web and native applications. With near-native performance, WASM enables:

- Running complex applications directly in the browser
- Porting existing desktop applications to the web
- Enhanced gaming experiences without plugins

## The Rise of Edge Computing

Edge computing is transforming how we think about web infrastructure:

- **Reduced Latency**: Processing data closer to users
- **Better Performance**: Faster response times for global applications
- **Cost Efficiency**: Reduced bandwidth costs and server load

## Progressive Web Apps Evolution

PWAs continue to blur the line between web and mobile apps:

- Enhanced offline capabilities
- Better integration with device features
- Improved installation and update processes

## Conclusion

The future of web development is bright and full of opportunities. By staying informed about these trends and continuously learning, developers can build more powerful, efficient, and user-friendly applications than ever before.

What trends are you most excited about? Share your thoughts in the comments below!"#,
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=400&fit=crop",
        author: "Sarah Johnson",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah",
        date: "Jan 15, 2024",
        read_time: "8 min read",
        likes: 234,
        comments: 45,
        tags: &["Technology", "Web Development", "AI", "Trends"],
        featured: true,
        category: "technology",
    },
    SampleArticle {
        id: "2",
        title: "Mastering the Art of Minimalist Design",
        excerpt: "Learn how to create stunning, user-friendly interfaces using minimalist design principles that enhance user experience.",
        content: r#"# Mastering the Art of Minimalist Design

Minimalism in design isn't just about using less—it's about making every element count. This comprehensive guide will help you understand and apply minimalist principles to create beautiful, functional designs.

## Understanding Minimalism

Minimalist design focuses on:
- Essential elements only
- Clear visual hierarchy
- Purposeful use of space
- Strong typography

## Key Principles

### 1. Embrace White Space
White space isn't empty space—it's a powerful design element that:
- Improves readability
- Creates visual hierarchy
- Reduces cognitive load

### 2. Limited Color Palette
Choose 2-3 colors maximum:
- One primary color
- One accent color
- Neutral backgrounds

### 3. Typography as a Design Element
Let your type do the talking:
- Use size and weight for hierarchy
- Stick to 2 fonts maximum
- Ensure excellent readability

## Practical Applications

Apply these principles to:
- Web interfaces
- Mobile applications
- Print design
- Branding materials

Remember: Less is more, but only when every element serves a purpose."#,
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=800&h=400&fit=crop",
        author: "Michael Chen",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Michael",
        date: "Jan 14, 2024",
        read_time: "6 min read",
        likes: 189,
        comments: 23,
        tags: &["Design", "UI/UX", "Minimalism"],
        featured: false,
        category: "design",
    },
    SampleArticle {
        id: "3",
        title: "Building a Successful Remote Team Culture",
        excerpt: "Discover strategies for creating a thriving remote work environment that fosters collaboration, productivity, and employee satisfaction.",
        content: r#"# Building a Successful Remote Team Culture

Remote work has transformed from a temporary solution to a permanent fixture in the modern workplace. Creating a strong team culture in a distributed environment requires intentional effort and the right strategies.

## Communication is Key

### Establish Clear Channels
- Define which tools to use for different types of communication
- Set response time expectations
- Create guidelines for asynchronous communication

### Regular Check-ins
- Daily standups for alignment
- Weekly one-on-ones for personal connection
- Monthly team meetings for broader updates

## Building Trust

Trust is the foundation of remote work success:
- Focus on outcomes, not hours
- Encourage transparency
- Celebrate achievements publicly

## Virtual Team Building

Keep your team connected:
- Virtual coffee breaks
- Online game sessions
- Collaborative projects

## Tools for Success

Invest in the right tools:
- Project management platforms
- Video conferencing solutions
- Collaborative documentation tools

## Maintaining Work-Life Balance

Help your team thrive:
- Respect time zones
- Encourage regular breaks
- Support flexible schedules

Building a remote culture takes time, but the investment pays dividends in team satisfaction and productivity."#,
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&h=400&fit=crop",
        author: "Emily Rodriguez",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Emily",
        date: "Jan 13, 2024",
        read_time: "10 min read",
        likes: 156,
        comments: 34,
        tags: &["Business", "Remote Work", "Team Management"],
        featured: false,
        category: "business",
    },
    SampleArticle {
        id: "4",
        title: "The Complete Guide to Sustainable Living",
        excerpt: "Simple changes you can make today to reduce your environmental impact and live a more sustainable lifestyle.",
        content: r#"# The Complete Guide to Sustainable Living

Living sustainably doesn't require drastic changes. Small, consistent actions can make a significant impact on our planet's health.

## Start with Energy

### At Home
- Switch to LED bulbs
- Unplug devices when not in use
- Use programmable thermostats

### Transportation
- Walk or bike for short trips
- Use public transportation
- Consider electric or hybrid vehicles

## Reduce, Reuse, Recycle

The three R's remain fundamental:
- Buy only what you need
- Find new uses for old items
- Properly sort recyclables

## Sustainable Shopping

Make conscious choices:
- Support local businesses
- Choose products with minimal packaging
- Buy quality items that last

## Food Choices Matter

Your diet impacts the environment:
- Reduce meat consumption
- Buy local and seasonal produce
- Minimize food waste

Every small action counts. Start with one change today!"#,
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=400&fit=crop",
        author: "David Park",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=David",
        date: "Jan 12, 2024",
        read_time: "7 min read",
        likes: 203,
        comments: 41,
        tags: &["Lifestyle", "Sustainability", "Environment"],
        featured: false,
        category: "lifestyle",
    },
    SampleArticle {
        id: "5",
        title: "Introduction to Machine Learning for Beginners",
        excerpt: "Demystifying machine learning with practical examples and easy-to-understand explanations for newcomers to the field.",
        content: r#"# Introduction to Machine Learning for Beginners

Machine Learning (ML) might seem complex, but at its core, it's about teaching computers to learn from data.

## What is Machine Learning?

Machine Learning is a subset of AI that enables computers to learn without being explicitly programmed.

### Types of Machine Learning
1. **Supervised Learning**: Learning from labeled data
2. **Unsupervised Learning**: Finding patterns in unlabeled data
3. **Reinforcement Learning**: Learning through trial and error

## Real-World Applications

ML is everywhere:
- Email spam filters
- Netflix recommendations
- Voice assistants
- Fraud detection

## Getting Started

### Prerequisites
- Basic programming knowledge (Python recommended)
- Understanding of statistics
- Curiosity and patience

### Your First Steps
1. Learn Python basics
2. Understand data structures
3. Explore ML libraries (scikit-learn, TensorFlow)
4. Work on simple projects

## Resources for Learning

- Online courses (Coursera, edX)
- YouTube tutorials
- Kaggle competitions
- Open-source projects

Machine Learning is an exciting field with endless possibilities. Start small, be consistent, and enjoy the journey!"#,
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&h=400&fit=crop",
        author: "Lisa Wang",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Lisa",
        date: "Jan 11, 2024",
        read_time: "9 min read",
        likes: 267,
        comments: 52,
        tags: &["Technology", "Machine Learning", "AI", "Tutorial"],
        featured: false,
        category: "technology",
    },
    SampleArticle {
        id: "6",
        title: "The Psychology of Color in Branding",
        excerpt: "Understanding how colors influence perception and decision-making can transform your brand's impact.",
        content: r#"# The Psychology of Color in Branding

Colors speak louder than words. They evoke emotions, trigger memories, and influence purchasing decisions.

## Color Associations

### Red
- Energy, passion, urgency
- Used by: Coca-Cola, Netflix, YouTube

### Blue
- Trust, stability, professionalism
- Used by: Facebook, IBM, PayPal

### Green
- Growth, nature, wealth
- Used by: Starbucks, Whole Foods, Spotify

### Yellow
- Optimism, clarity, warmth
- Used by: McDonald's, IKEA, Snapchat

## Choosing Your Brand Colors

Consider:
1. Your target audience
2. Industry conventions
3. Cultural contexts
4. Competitor analysis

## Color Combinations

Effective combinations:
- Complementary: High contrast, vibrant
- Analogous: Harmonious, pleasing
- Triadic: Balanced, colorful

## Testing and Iteration

Always test your color choices:
- A/B testing
- Focus groups
- User feedback

Colors are powerful tools in your branding arsenal. Use them wisely!"#,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=400&fit=crop",
        author: "Alex Thompson",
        author_avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex",
        date: "Jan 10, 2024",
        read_time: "5 min read",
        likes: 198,
        comments: 28,
        tags: &["Design", "Branding", "Psychology", "Marketing"],
        featured: false,
        category: "design",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let articles = sample_articles();
        let ids = articles.iter().map(|a| a.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), articles.len());
    }

    #[test]
    fn sample_set_has_one_featured_article() {
        let featured = sample_articles()
            .into_iter()
            .filter(|a| a.featured)
            .map(|a| a.id)
            .collect::<Vec<_>>();
        assert_eq!(featured, vec!["1".to_string()]);
    }

    #[test]
    fn sample_comment_avatars_use_first_name_seed() {
        let comments = sample_comments();
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[1].avatar, "https://api.dicebear.com/7.x/avataaars/svg?seed=Jane");
    }
}

//! The in-memory seed dataset: three users, six articles and their
//! comment threads.  This stands in for a backend; there is no other
//! source of records.

use chrono::NaiveDateTime;

use crate::models::*;

fn ts(secs: i64) -> NaiveDateTime {
  NaiveDateTime::from_timestamp(secs, 0)
}

lazy_static! {
  static ref USERS: Vec<User> = vec![
    User {
      id: 1,
      name: "John Doe".into(),
      username: "johndoe".into(),
      email: "john@example.com".into(),
      avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=300".into(),
      bio: "Writer, tech enthusiast, and coffee lover. Sharing thoughts on the digital world.".into(),
      joined_at: ts(1673784000), // 2023-01-15
      followers: 128,
      following: 76,
    },
    User {
      id: 2,
      name: "Jane Smith".into(),
      username: "janesmith".into(),
      email: "jane@example.com".into(),
      avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300".into(),
      bio: "Digital artist and UI/UX designer. Passionate about creating beautiful interfaces.".into(),
      joined_at: ts(1676712600), // 2023-02-18
      followers: 235,
      following: 112,
    },
    User {
      id: 3,
      name: "Robert Johnson".into(),
      username: "robertj".into(),
      email: "robert@example.com".into(),
      avatar: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=300".into(),
      bio: "Software engineer and open-source contributor. Building solutions for everyday problems.".into(),
      joined_at: ts(1678031100), // 2023-03-05
      followers: 89,
      following: 42,
    },
  ];
}

pub fn users() -> Vec<User> {
  USERS.clone()
}

/// The fixed identity every login resolves to.
pub fn demo_user() -> User {
  USERS[0].clone()
}

fn article(
  id: i32,
  title: &str,
  body: &str,
  excerpt: &str,
  cover_image: &str,
  published_at: i64,
  read_time: u32,
  category: Category,
  tags: &[&str],
  author: &User,
  like_count: i64,
) -> Article {
  Article {
    id,
    title: title.into(),
    body: body.into(),
    excerpt: excerpt.into(),
    cover_image: cover_image.into(),
    published_at: ts(published_at),
    read_time,
    category,
    tags: tags.iter().map(|t| t.to_string()).collect(),
    author: author.clone(),
    like_count,
    // Recomputed from the live comments when the repository loads.
    comment_count: 0,
    liked: false,
    bookmarked: false,
  }
}

/// Seed articles, newest first.
pub fn articles() -> Vec<Article> {
  let users = &*USERS;
  vec![
    article(
      1,
      "The Future of Web Development: Trends to Watch in 2025",
      "<p>The web development landscape is constantly evolving, and staying ahead of the curve is essential. \
       WebAssembly is bringing near-native performance to the browser, AI assistants are becoming part of the \
       development process itself, and edge computing is moving code closer to end-users. Accessibility is \
       finally transitioning from an afterthought to a fundamental aspect of how we build for the web.</p>",
      "Explore the cutting-edge trends that will define web development in 2025, from WebAssembly and AI-driven development to edge computing and accessibility innovations.",
      "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1697360400, // 2023-10-15
      8,
      Category::Technology,
      &["webdev", "javascript", "programming", "future", "ai"],
      &users[0],
      152,
    ),
    article(
      2,
      "Designing Intuitive User Interfaces: Principles and Practices",
      "<p>Great user interfaces don't happen by accident. They're the result of thoughtful design decisions \
       guided by well-established principles: meet user expectations, follow the principle of least surprise, \
       build a clear visual hierarchy, give feedback for every action, and treat accessibility as intuitive \
       design rather than compliance. And no matter how closely you follow the principles, there is no \
       substitute for testing with real users.</p>",
      "Learn the fundamental principles of intuitive UI design and how to apply them, from visual hierarchy and feedback to accessibility and user testing.",
      "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1695911400, // 2023-09-28
      7,
      Category::Design,
      &["uiux", "design", "userexperience", "accessibility"],
      &users[1],
      208,
    ),
    article(
      3,
      "Building a Sustainable Business: Strategies for Long-Term Success",
      "<p>Sustainable businesses balance the triple bottom line: people, planet, and profit. Companies that \
       invest in long-term customer relationships, responsible sourcing, and employee wellbeing consistently \
       outperform those chasing quarterly numbers. Environmental initiatives, far from being a cost center, \
       increasingly translate into customer loyalty and durable profitability.</p>",
      "Practical strategies for building a business that lasts, from the triple bottom line to long-term customer relationships.",
      "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1694344500, // 2023-09-10
      9,
      Category::Business,
      &["sustainability", "business", "entrepreneurship", "leadership"],
      &users[2],
      178,
    ),
    article(
      4,
      "Mindful Living: Incorporating Wellness Practices Into Your Daily Routine",
      "<p>Wellness is not a destination but a daily practice. Small, consistent habits compound: a morning \
       routine that doesn't start with a screen, digital boundaries such as a 'digital sunset' before bed, \
       mindful meals, and short deliberate pauses through the day. None of these require more time so much \
       as more intention.</p>",
      "Simple, sustainable wellness practices you can fold into an ordinary day, from digital boundaries to mindful pauses.",
      "https://images.pexels.com/photos/3759661/pexels-photo-3759661.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1692722700, // 2023-08-22
      8,
      Category::Lifestyle,
      &["wellness", "mindfulness", "health", "selfcare"],
      &users[1],
      245,
    ),
    article(
      5,
      "The Renaissance of AI: How Machine Learning is Transforming Industries",
      "<p>Machine learning has moved from research labs into the operational core of entire industries. In \
       healthcare, models assist radiologists in catching subtle abnormalities; in logistics, they reroute \
       freight around disruptions before humans notice them; in finance, they surface fraud in milliseconds. \
       The common thread is augmentation: the most successful deployments pair the model's pattern \
       recognition with human judgment.</p>",
      "From medical imaging to logistics, a tour of the industries machine learning is quietly reshaping, and why augmentation beats automation.",
      "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1691231400, // 2023-08-05
      10,
      Category::Technology,
      &["ai", "machinelearning", "technology", "innovation"],
      &users[0],
      312,
    ),
    article(
      6,
      "Sustainable Architecture: Designing Buildings for the Future",
      "<p>Buildings account for a large share of global energy use, and architects are responding with \
       passive design, low-VOC and responsibly sourced materials, and adaptive reuse of existing structures. \
       The most interesting projects preserve the historical character of a building while bringing it up to \
       modern sustainability standards.</p>",
      "How passive design, sustainable materials, and adaptive reuse are reshaping the buildings we live and work in.",
      "https://images.pexels.com/photos/323780/pexels-photo-323780.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
      1689686400, // 2023-07-18
      9,
      Category::Design,
      &["architecture", "sustainability", "design", "environment"],
      &users[2],
      187,
    ),
  ]
}

fn comment(
  id: i32,
  article_id: i32,
  parent_id: Option<i32>,
  author: &User,
  content: &str,
  created_at: i64,
  like_count: i64,
) -> Comment {
  Comment {
    id,
    article_id,
    parent_id,
    author: author.clone(),
    content: content.into(),
    created_at: ts(created_at),
    like_count,
    liked: false,
  }
}

/// Seed comment threads.  Parent references always point at an earlier
/// comment on the same article.
pub fn comments() -> Vec<Comment> {
  let users = &*USERS;
  vec![
    comment(1, 1, None, &users[1],
      "This is a fantastic overview of where web development is heading! I'm particularly excited about the potential of WebAssembly.",
      1697380200, 12),
    comment(2, 1, Some(1), &users[0],
      "Thanks for your comment! Have you experimented with WebAssembly in any of your projects yet?",
      1697384700, 5),
    comment(3, 1, Some(2), &users[1],
      "I've been using it for a 3D visualization tool. The performance gain compared to pure JavaScript is remarkable.",
      1697386800, 8),
    comment(4, 1, None, &users[2],
      "I appreciate the emphasis on accessibility becoming a standard rather than an afterthought.",
      1697447400, 15),
    comment(5, 2, None, &users[0],
      "This article should be required reading for anyone working in UI/UX design. The principle of least surprise is so often overlooked.",
      1695924300, 23),
    comment(6, 2, Some(5), &users[1],
      "I'm glad you found it valuable! When users don't have to think about how to use an interface, that's when we've succeeded.",
      1695928500, 10),
    comment(7, 2, None, &users[2],
      "Great article, but how do you balance consistency with innovation in new interaction models?",
      1695987000, 8),
    comment(8, 3, None, &users[0],
      "The triple bottom line approach has been transformative for our company. Environmental initiatives created real customer loyalty.",
      1694421900, 19),
    comment(9, 3, Some(8), &users[2],
      "That's great to hear! Would you share some specific examples of initiatives that resonated most with your customers?",
      1694424000, 7),
    comment(10, 3, None, &users[1],
      "The section on long-term customer relationships is particularly relevant in today's subscription economy.",
      1694527800, 12),
    comment(11, 4, None, &users[2],
      "The section on digital boundaries resonated with me deeply. A 'digital sunset' practice improved both my sleep and my general wellbeing.",
      1692774900, 34),
    comment(12, 4, Some(11), &users[1],
      "I'm so glad to hear that! Have you noticed any specific improvements in your sleep quality?",
      1692783000, 8),
    comment(13, 5, None, &users[2],
      "The healthcare applications are particularly exciting. I work in medical imaging, and AI already assists radiologists in detecting subtle abnormalities.",
      1691340300, 27),
    comment(14, 5, Some(13), &users[0],
      "That's fascinating! Is the AI autonomous in your facility, or more of a second opinion for human radiologists?",
      1691343000, 11),
    comment(15, 5, Some(14), &users[2],
      "It's a collaborative approach. The AI flags potential areas of concern, but radiologists make the final interpretations and diagnoses.",
      1691345700, 19),
    comment(16, 6, None, &users[0],
      "As someone working in construction, I've noticed a significant shift toward sustainable materials. Clients request low-VOC finishes even at a premium.",
      1689762000, 15),
    comment(17, 6, None, &users[1],
      "Adaptive reuse is particularly relevant in cities with historical buildings. I'd love to see more examples that maintain historical character.",
      1689863700, 21),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_parents_reference_earlier_comments_on_the_same_article() {
    let comments = comments();
    for c in comments.iter() {
      if let Some(parent_id) = c.parent_id {
        let parent = comments
          .iter()
          .find(|p| p.id == parent_id)
          .expect("seed parent must exist");
        assert_eq!(parent.article_id, c.article_id);
        assert!(parent.created_at < c.created_at);
      }
    }
  }

  #[test]
  fn seed_like_counts_match_the_featured_ordering_fixture() {
    let articles = articles();
    assert_eq!(articles[0].like_count, 152);
    assert_eq!(articles[1].like_count, 208);
    assert_eq!(articles[2].like_count, 178);
  }
}

//! Server-rendered HTML pages.
//!
//! Every user-supplied string goes through `html_escape` before it reaches
//! the markup.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use chirp_core::domain::{Post, User};

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{} | Chirp</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        text(title),
        body
    )
}

fn post_items(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "<p>No posts yet.</p>".to_string();
    }

    let items: String = posts
        .iter()
        .map(|post| {
            format!(
                "<li><a href=\"/posts/{}\">{}</a></li>\n",
                post.id,
                text(&post.content)
            )
        })
        .collect();
    format!("<ul>\n{items}</ul>")
}

pub fn index() -> String {
    layout(
        "Welcome",
        "<h1>Welcome to Chirp</h1>\n<p><a href=\"/signup\">Sign up</a> or <a href=\"/login\">log in</a>.</p>",
    )
}

pub fn signup_form() -> String {
    layout(
        "Sign up",
        "<h1>Sign up</h1>\n\
         <form action=\"/signup\" method=\"post\">\n\
         <label for=\"username\">Username</label> <input type=\"text\" id=\"username\" name=\"username\">\n\
         <label for=\"email\">Email</label> <input type=\"email\" id=\"email\" name=\"email\">\n\
         <label for=\"password\">Password</label> <input type=\"password\" id=\"password\" name=\"password\">\n\
         <input type=\"submit\" id=\"submit\" value=\"Sign up\">\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a>.</p>",
    )
}

pub fn login_form() -> String {
    layout(
        "Log in",
        "<h1>Log in</h1>\n\
         <form action=\"/login\" method=\"post\">\n\
         <label for=\"username\">Username</label> <input type=\"text\" id=\"username\" name=\"username\">\n\
         <label for=\"password\">Password</label> <input type=\"password\" id=\"password\" name=\"password\">\n\
         <input type=\"submit\" id=\"submit\" value=\"Log in\">\n\
         </form>\n\
         <p>New here? <a href=\"/signup\">Sign up</a>.</p>",
    )
}

pub fn posts_index(current: &User, posts: &[Post]) -> String {
    let body = format!(
        "<h1>Welcome, {}!</h1>\n\
         <p><a href=\"/posts/new\">New Post</a> | <a href=\"/users/{}\">My profile</a> | <a href=\"/logout\">Log out</a></p>\n\
         {}",
        text(&current.username),
        attr(&current.slug),
        post_items(posts)
    );
    layout("Posts", &body)
}

pub fn new_post_form() -> String {
    layout(
        "New post",
        "<h1>New post</h1>\n\
         <form action=\"/posts\" method=\"post\">\n\
         <textarea id=\"content\" name=\"content\"></textarea>\n\
         <input type=\"submit\" id=\"submit\" value=\"Post\">\n\
         </form>",
    )
}

pub fn show_post(post: &Post, author: Option<&User>) -> String {
    let byline = match author {
        Some(user) => format!(
            "<p>by <a href=\"/users/{}\">{}</a></p>",
            attr(&user.slug),
            text(&user.username)
        ),
        None => String::new(),
    };

    let body = format!(
        "<p>{content}</p>\n{byline}\n\
         <a href=\"/posts/{id}/edit\">Edit Post</a>\n\
         <form action=\"/posts/{id}/delete\" method=\"post\">\n\
         <input type=\"submit\" id=\"delete\" value=\"Delete Post\">\n\
         </form>\n\
         <p><a href=\"/posts\">All posts</a></p>",
        content = text(&post.content),
        byline = byline,
        id = post.id,
    );
    layout("Post", &body)
}

pub fn edit_post_form(post: &Post) -> String {
    let body = format!(
        "<h1>Edit post</h1>\n\
         <form action=\"/posts/{id}\" method=\"post\">\n\
         <textarea id=\"content\" name=\"content\">{content}</textarea>\n\
         <input type=\"submit\" id=\"submit\" value=\"Save\">\n\
         </form>",
        id = post.id,
        content = text(&post.content),
    );
    layout("Edit post", &body)
}

pub fn post_deleted() -> String {
    layout(
        "Post deleted",
        "<p>Your post was deleted.</p>\n<p><a href=\"/posts\">Back to all posts</a></p>",
    )
}

pub fn user_profile(user: &User, posts: &[Post]) -> String {
    let body = format!(
        "<h1>{}</h1>\n{}",
        text(&user.username),
        post_items(posts)
    );
    layout(&user.username, &body)
}

pub fn not_found(detail: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>{}</p>\n<p><a href=\"/\">Home</a></p>",
        text(detail)
    );
    layout("Not found", &body)
}

pub fn internal_error() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn post_content_is_escaped() {
        let post = Post::new(Uuid::new_v4(), "<script>alert(1)</script>").unwrap();

        let page = show_post(&post, None);

        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn show_post_offers_edit_and_delete() {
        let post = Post::new(Uuid::new_v4(), "i am a boss at tweeting").unwrap();

        let page = show_post(&post, None);

        assert!(page.contains("Edit Post"));
        assert!(page.contains("Delete Post"));
        assert!(page.contains(&format!("/posts/{}/delete", post.id)));
    }
}

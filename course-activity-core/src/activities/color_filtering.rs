use crate::builder::ActivityBuilder;
use crate::domain::{Activity, ActivityError, ActivityRef};

/// Where this lesson sits in the course
pub const REFERENCE: ActivityRef = ActivityRef::new(1, 2);

const TRY_AGAIN: &str = "Please try again.";

/// Color filtering of image search results
///
/// A multiple-choice question on a practice sample, followed by a free-text
/// question asking which color isolates charts and graphs.
pub fn activity() -> Result<Activity, ActivityError> {
    ActivityBuilder::new()
        .markup(
            "<br><br><br>Practice code sample: \
             <iframe src=\"https://docs.google.com/file/d/0B3YNr_NmMv7US1VFeW05SHY3OU0/preview\" \
             width=\"640\" height=\"480\"></iframe><br><br><br>",
        )
        .multiple_choice([
            ("A", false, TRY_AGAIN),
            ("B", false, TRY_AGAIN),
            ("C", false, TRY_AGAIN),
            (
                "D",
                true,
                "Correct! Filtering by color would help you view all the books with yellow covers.",
            ),
        ])
        .markup("<br><br><br><img src=\"assets/img/Image1.3.png\" height=450 width=785><p/>")
        .markup(
            "<br><b>2.</b> You want statistics on college loans. If you search using \
             [college loans statistics], you get the image results above. What color would \
             you click to see just the charts and graphs? ",
        )
        .free_text(
            "white?",
            "i",
            "Correct! Many charts, tables, and graphs have white backgrounds, so filtering \
             for white images helps you find them faster.",
            "Try again. Consider what color would be dominant in images of charts, tables, \
             and graphs. Look at the results above. Each of those sources is traditionally \
             printed on paper.",
            "Our search expert says: I would click on white in the color grid, since many \
             charts, tables, and graphs have white backgrounds.",
        )
        .markup(
            "<br><br><br><b>3.</b> What is something you have wanted to find that color \
             filtering might have helped you locate faster? Try it out and share your story \
             in the <a href=\"LINK_TO_COURSE_FORUM\" target=\"_blank\">forum</a>.",
        )
        .build()
}

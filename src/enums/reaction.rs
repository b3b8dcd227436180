//! Enumerations describing reactions.

graphql_enum! {
    ReactionContent: "Emojis that can be attached to Issues, Pull Requests and Comments." {
        ThumbsUp => "THUMBS_UP"
            as "Represents the 👍 emoji.",
        ThumbsDown => "THUMBS_DOWN"
            as "Represents the 👎 emoji.",
        Laugh => "LAUGH"
            as "Represents the 😄 emoji.",
        Hooray => "HOORAY"
            as "Represents the 🎉 emoji.",
        Confused => "CONFUSED"
            as "Represents the 😕 emoji.",
        Heart => "HEART"
            as "Represents the ❤️ emoji.",
    }
}

graphql_enum! {
    ReactionOrderField: "A list of fields that reactions can be ordered by." {
        CreatedAt => "CREATED_AT"
            as "Allows ordering a list of reactions by when they were created.",
    }
}

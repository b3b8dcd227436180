//! Enumerations describing projects.

graphql_enum! {
    ProjectCardState: "Various content states of a ProjectCard." {
        ContentOnly => "CONTENT_ONLY"
            as "The card has content only.",
        NoteOnly => "NOTE_ONLY"
            as "The card has a note only.",
        Redacted => "REDACTED"
            as "The card is redacted.",
    }
}

graphql_enum! {
    ProjectOrderField: "Properties by which project connections can be ordered." {
        CreatedAt => "CREATED_AT"
            as "Order projects by creation time.",
        UpdatedAt => "UPDATED_AT"
            as "Order projects by update time.",
        Name => "NAME"
            as "Order projects by name.",
    }
}

graphql_enum! {
    ProjectState: "State of the project; either 'open' or 'closed'." {
        Open => "OPEN"
            as "The project is open.",
        Closed => "CLOSED"
            as "The project is closed.",
    }
}

//! Enumerations describing Git objects and commit statuses.

graphql_enum! {
    GitSignatureState: "The state of a Git signature." {
        Valid => "VALID"
            as "Valid signature and verified by GitHub.",
        Invalid => "INVALID"
            as "Invalid signature.",
        MalformedSig => "MALFORMED_SIG"
            as "Malformed signature.",
        UnknownKey => "UNKNOWN_KEY"
            as "Key used for signing not known to GitHub.",
        BadEmail => "BAD_EMAIL"
            as "Invalid email used for signing.",
        UnverifiedEmail => "UNVERIFIED_EMAIL"
            as "Email used for signing unverified on GitHub.",
        NoUser => "NO_USER"
            as "Email used for signing not known to GitHub.",
        UnknownSigType => "UNKNOWN_SIG_TYPE"
            as "Unknown signature type.",
        Unsigned => "UNSIGNED"
            as "Unsigned.",
        GpgverifyUnavailable => "GPGVERIFY_UNAVAILABLE"
            as "Internal error - the GPG verification service is unavailable at the moment.",
        GpgverifyError => "GPGVERIFY_ERROR"
            as "Internal error - the GPG verification service misbehaved.",
        NotSigningKey => "NOT_SIGNING_KEY"
            as "The usage flags for the key that signed this don't allow signing.",
        ExpiredKey => "EXPIRED_KEY"
            as "Signing key expired.",
    }
}

graphql_enum! {
    StatusState: "The possible commit status states." {
        Expected => "EXPECTED"
            as "Status is expected.",
        Error => "ERROR"
            as "Status is errored.",
        Failure => "FAILURE"
            as "Status is failing.",
        Pending => "PENDING"
            as "Status is pending.",
        Success => "SUCCESS"
            as "Status is successful.",
    }
}

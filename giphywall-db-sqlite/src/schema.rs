diesel::table! {
    gifs (rowid) {
        rowid -> BigInt,
        id -> Text,
        source -> Text,
        caption -> Nullable<Text>,
        giphy_id -> Nullable<Text>,
        tags -> Text,
        uploaded_by -> Nullable<Text>,
        created_at -> BigInt,
    }
}

diesel::table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        login_identifier -> Text,
        display_name -> Text,
        username -> Nullable<Text>,
        email -> Nullable<Text>,
        created_at -> BigInt,
        last_login_at -> Nullable<BigInt>,
    }
}

diesel::table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        gif_id -> Text,
        text -> Text,
        ai_generated -> Bool,
        created_at -> BigInt,
    }
}

diesel::allow_tables_to_appear_in_same_query!(gifs, users, comments);

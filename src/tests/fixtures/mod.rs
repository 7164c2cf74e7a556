pub mod commands {
    pub mod post_lyb;
}

pub mod events {
    pub mod lyb_posted_v1;
}

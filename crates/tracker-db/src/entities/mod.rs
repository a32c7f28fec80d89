pub mod album;
pub mod album_artist;
pub mod artist;
pub mod artist_album_ranking;
pub mod artist_album_ranking_entry;
pub mod list;
pub mod list_song;
pub mod song;
pub mod song_artist;

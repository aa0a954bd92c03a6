use crate::model::stremio::{MetaPreview, PlaylistEntry};
use crate::utils::constants::{M3U_EXTINF, M3U_URL_PREFIX, UNKNOWN_TITLE};

/// Title of an `#EXTINF` line: the text between the first and the second comma.
fn extract_title(line: &str) -> Option<&str> {
    line.split(',').nth(1).filter(|title| !title.is_empty())
}

/// Walks the playlist lines and hands every url line, paired with the last seen title, to
/// `visit`. A title stays current until the next `#EXTINF` line.
pub fn consume_m3u<'a, I, F: FnMut(PlaylistEntry)>(lines: I, mut visit: F)
where
    I: Iterator<Item=&'a str>,
{
    let mut current_title: Option<&str> = None;
    for raw_line in lines {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.starts_with(M3U_EXTINF) {
            current_title = Some(extract_title(line).unwrap_or(UNKNOWN_TITLE));
        } else if line.starts_with(M3U_URL_PREFIX) {
            visit(PlaylistEntry {
                title: current_title.unwrap_or(UNKNOWN_TITLE).to_string(),
                stream_url: line.to_string(),
            });
        }
    }
}

pub fn parse_m3u<'a, I>(lines: I) -> Vec<MetaPreview>
where
    I: Iterator<Item=&'a str>,
{
    let mut result = vec![];
    consume_m3u(lines, |entry| result.push(MetaPreview::from(entry)));
    result
}

#[cfg(test)]
mod tests {
    use crate::processing::parser::m3u::parse_m3u;
    use crate::utils::id_utils::decode_item_id;

    const PLAYLIST: &str = r#"#EXTM3U
#EXTINF:-1 tvg-id="" tvg-name="Matrix" tvg-logo="http://logo/x.png" group-title="Movies",Matrix
http://iptv.example.com/movie/user/pass/1001.mp4
#EXTINF:-1,Dune
#EXTVLCOPT:http-user-agent=Player

http://iptv.example.com/movie/user/pass/1002.mkv
# a comment
https://iptv.example.com/movie/user/pass/1003.ts?token=a%2Fb&x=1
"#;

    #[test]
    fn test_parse_playlist() {
        let metas = parse_m3u(PLAYLIST.lines());
        let names: Vec<&str> = metas.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Matrix", "Dune", "Dune"]);
        assert!(metas.iter().all(|m| m.content_type == "movie"));
        assert!(metas.iter().all(|m| m.poster == "https://via.placeholder.com/150"));
        assert!(metas.iter().all(|m| m.description == "Filme IPTV"));
    }

    #[test]
    fn test_item_count_matches_url_lines() {
        let url_lines = PLAYLIST.lines().filter(|l| l.starts_with("http")).count();
        assert_eq!(parse_m3u(PLAYLIST.lines()).len(), url_lines);
    }

    #[test]
    fn test_ids_round_trip() {
        let urls: Vec<&str> = PLAYLIST.lines().filter(|l| l.starts_with("http")).collect();
        let metas = parse_m3u(PLAYLIST.lines());
        for (meta, url) in metas.iter().zip(urls) {
            assert!(meta.id.starts_with("custom_"));
            assert_eq!(decode_item_id(&meta.id), url);
        }
    }

    #[test]
    fn test_title() {
        let metas = parse_m3u("#EXTINF:-1,My Movie\nhttp://x/y.ts".lines());
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "My Movie");
    }

    #[test]
    fn test_sticky_title() {
        let metas = parse_m3u("#EXTINF:-1,A\nhttp://1\nhttp://2".lines());
        assert_eq!(metas.len(), 2);
        assert!(metas.iter().all(|m| m.name == "A"));
        assert_ne!(metas[0].id, metas[1].id);
    }

    #[test]
    fn test_missing_title() {
        let metas = parse_m3u("http://lonely".lines());
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "Filme Desconhecido");

        let metas = parse_m3u("#EXTINF:-1\nhttp://a\n#EXTINF:-1,\nhttp://b".lines());
        assert_eq!(metas.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["Filme Desconhecido", "Filme Desconhecido"]);
    }

    #[test]
    fn test_title_with_commas() {
        let metas = parse_m3u("#EXTINF:-1,Me, Myself and Irene\nhttp://x".lines());
        assert_eq!(metas[0].name, "Me");
    }

    #[test]
    fn test_unpaired_title_is_dropped() {
        let metas = parse_m3u("#EXTINF:-1,First\n#EXTINF:-1,Second\nhttp://x".lines());
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "Second");
    }

    #[test]
    fn test_crlf_lines() {
        let metas = parse_m3u("#EXTM3U\r\n#EXTINF:-1,Movie\r\nhttp://x/y.ts\r\n".split('\n'));
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "Movie");
        assert_eq!(decode_item_id(&metas[0].id), "http://x/y.ts");
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(parse_m3u("".lines()).is_empty());
        assert!(parse_m3u("#EXTM3U\n#EXTINF:-1,Lost\nrtmp://x\n  http://indented\nftp://y".lines()).is_empty());
    }
}

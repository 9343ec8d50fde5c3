//! 브라우저용 HTML 뷰
//!
//! 홈 화면과 OAuth 에러 화면 두 가지만 서버에서 렌더링합니다.
//! 나머지 화면 구성은 `/api/spotify/*` JSON을 사용하는 프론트엔드의 몫입니다.

use crate::utils::string_utils::escape_html;

const LAYOUT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Spotify Web App</title>
</head>
<body>
"#;

const LAYOUT_TAIL: &str = "</body>\n</html>\n";

/// 홈 화면. 세션에 토큰이 있으면 로그아웃 링크, 없으면 로그인 링크를 보여줍니다.
pub fn index_page(authenticated: bool) -> String {
    let content = if authenticated {
        r#"<h1>Spotify Web App</h1>
<p>Connected to Spotify.</p>
<ul>
<li><a href="/api/spotify/top-tracks">Top tracks</a></li>
<li><a href="/api/spotify/now-playing">Now playing</a></li>
<li><a href="/api/spotify/following-artists">Following artists</a></li>
</ul>
<p><a href="/logout">Log out</a></p>
"#
    } else {
        r#"<h1>Spotify Web App</h1>
<p><a href="/login">Log in with Spotify</a></p>
"#
    };

    format!("{}{}{}", LAYOUT_HEAD, content, LAYOUT_TAIL)
}

/// OAuth 에러 화면. 메시지는 이스케이프되어 그대로 표시됩니다.
pub fn error_page(message: &str) -> String {
    format!(
        "{}<h1>Error</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to home</a></p>\n{}",
        LAYOUT_HEAD,
        escape_html(message),
        LAYOUT_TAIL
    )
}

/// Maps a category code to its display name.
///
/// Unknown codes pass through unchanged, so values that are already
/// display names are left alone.
pub fn category_display_name(code: &str) -> &str {
    match code {
        "dongbei" => "东北菜",
        "sichuan" => "川菜",
        "hunan" => "湘菜",
        "jiangzhe" => "江浙菜",
        "fastfood" => "快餐",
        "japanese" => "日料",
        "yungui" => "云贵菜",
        "healthy" => "健康餐",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::category_display_name;

    #[test]
    fn test_known_codes() {
        assert_eq!(category_display_name("dongbei"), "东北菜");
        assert_eq!(category_display_name("sichuan"), "川菜");
        assert_eq!(category_display_name("hunan"), "湘菜");
        assert_eq!(category_display_name("jiangzhe"), "江浙菜");
        assert_eq!(category_display_name("fastfood"), "快餐");
        assert_eq!(category_display_name("japanese"), "日料");
        assert_eq!(category_display_name("yungui"), "云贵菜");
        assert_eq!(category_display_name("healthy"), "健康餐");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(category_display_name("western"), "western");
        assert_eq!(category_display_name(""), "");
        assert_eq!(category_display_name("川菜"), "川菜");
    }
}

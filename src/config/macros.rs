macro_rules! extract_vec_multi {
    (
        $line: ident,
        $identifier: ident,
        $vector: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line);
            let value = Util::split_values(value);
            let value = value
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());
            $vector.extend(value);
            continue;
        }
    };
}

macro_rules! extract_parsed_single {
    (
        $line: ident,
        $identifier: ident,
        $option: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line).trim();
            let parsed = value.parse().map_err(|_| ConfigError::BadValue {
                key: $identifier.trim_end_matches(':').to_owned(),
                value: value.to_owned(),
            })?;
            $option = Some(parsed);
            continue;
        }
    };
}

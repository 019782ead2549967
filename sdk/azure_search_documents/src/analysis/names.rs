//! Names of built-in analysis components.
//!
//! Each vocabulary also accepts the name of a custom component defined on the
//! index, which lands in the `Other` variant.

azure_sdk_core::expandable_enum! {
    /// Built-in analyzers, or the name of a custom analyzer.
    pub enum LexicalAnalyzerName {
        /// Microsoft analyzer for Arabic.
        ArMicrosoft => "ar.microsoft",
        /// Lucene analyzer for Arabic.
        ArLucene => "ar.lucene",
        /// Microsoft analyzer for Chinese (Simplified).
        ZhHansMicrosoft => "zh-Hans.microsoft",
        /// Lucene analyzer for Chinese (Simplified).
        ZhHansLucene => "zh-Hans.lucene",
        /// Microsoft analyzer for Danish.
        DaMicrosoft => "da.microsoft",
        /// Lucene analyzer for Danish.
        DaLucene => "da.lucene",
        /// Microsoft analyzer for Dutch.
        NlMicrosoft => "nl.microsoft",
        /// Lucene analyzer for Dutch.
        NlLucene => "nl.lucene",
        /// Microsoft analyzer for English.
        EnMicrosoft => "en.microsoft",
        /// Lucene analyzer for English.
        EnLucene => "en.lucene",
        /// Microsoft analyzer for French.
        FrMicrosoft => "fr.microsoft",
        /// Lucene analyzer for French.
        FrLucene => "fr.lucene",
        /// Microsoft analyzer for German.
        DeMicrosoft => "de.microsoft",
        /// Lucene analyzer for German.
        DeLucene => "de.lucene",
        /// Microsoft analyzer for Italian.
        ItMicrosoft => "it.microsoft",
        /// Lucene analyzer for Italian.
        ItLucene => "it.lucene",
        /// Microsoft analyzer for Japanese.
        JaMicrosoft => "ja.microsoft",
        /// Lucene analyzer for Japanese.
        JaLucene => "ja.lucene",
        /// Microsoft analyzer for Korean.
        KoMicrosoft => "ko.microsoft",
        /// Lucene analyzer for Korean.
        KoLucene => "ko.lucene",
        /// Microsoft analyzer for Polish.
        PlMicrosoft => "pl.microsoft",
        /// Lucene analyzer for Polish.
        PlLucene => "pl.lucene",
        /// Microsoft analyzer for Portuguese (Brazil).
        PtBrMicrosoft => "pt-BR.microsoft",
        /// Lucene analyzer for Portuguese (Brazil).
        PtBrLucene => "pt-BR.lucene",
        /// Microsoft analyzer for Russian.
        RuMicrosoft => "ru.microsoft",
        /// Lucene analyzer for Russian.
        RuLucene => "ru.lucene",
        /// Microsoft analyzer for Spanish.
        EsMicrosoft => "es.microsoft",
        /// Lucene analyzer for Spanish.
        EsLucene => "es.lucene",
        /// Microsoft analyzer for Swedish.
        SvMicrosoft => "sv.microsoft",
        /// Lucene analyzer for Swedish.
        SvLucene => "sv.lucene",
        /// Microsoft analyzer for Turkish.
        TrMicrosoft => "tr.microsoft",
        /// Lucene analyzer for Turkish.
        TrLucene => "tr.lucene",
        /// Standard Lucene analyzer.
        StandardLucene => "standard.lucene",
        /// Standard ASCII-folding Lucene analyzer.
        StandardAsciiFoldingLucene => "standardasciifolding.lucene",
        /// Treats the entire field content as a single token.
        Keyword => "keyword",
        /// Separates text into terms with a regular expression.
        Pattern => "pattern",
        /// Divides text at non-letters and lowercases.
        Simple => "simple",
        /// Divides text at non-letters, lowercases and removes stopwords.
        Stop => "stop",
        /// Splits text at whitespace.
        Whitespace => "whitespace",
    }
}

azure_sdk_core::expandable_enum! {
    /// Built-in tokenizers, or the name of a custom tokenizer.
    pub enum LexicalTokenizerName {
        /// Grammar-based tokenizer for most European-language documents.
        Classic => "classic",
        /// Tokenizes the input from an edge into n-grams.
        EdgeNGram => "edgeNGram",
        /// Emits the entire input as a single token.
        Keyword => "keyword_v2",
        /// Divides text at non-letters.
        Letter => "letter",
        /// Divides text at non-letters and lowercases.
        Lowercase => "lowercase",
        /// Divides text using language-specific rules.
        MicrosoftLanguageTokenizer => "microsoft_language_tokenizer",
        /// Divides text using language-specific rules and reduces words to base forms.
        MicrosoftLanguageStemmingTokenizer => "microsoft_language_stemming_tokenizer",
        /// Tokenizes the input into n-grams.
        NGram => "nGram",
        /// Tokenizer for path-like hierarchies.
        PathHierarchy => "path_hierarchy_v2",
        /// Uses regex pattern matching to construct distinct tokens.
        Pattern => "pattern",
        /// Standard Lucene analyzer tokenizer.
        Standard => "standard_v2",
        /// Tokenizes urls and emails as one token.
        UaxUrlEmail => "uax_url_email",
        /// Divides text at whitespace.
        Whitespace => "whitespace",
    }
}

azure_sdk_core::expandable_enum! {
    /// Built-in token filters, or the name of a custom token filter.
    pub enum TokenFilterName {
        /// Arabic normalization.
        ArabicNormalization => "arabic_normalization",
        /// Strips apostrophes and everything after them.
        Apostrophe => "apostrophe",
        /// Folds non-ASCII characters into ASCII equivalents.
        AsciiFolding => "asciifolding",
        /// Forms bigrams of CJK terms.
        CjkBigram => "cjk_bigram",
        /// Normalizes CJK width differences.
        CjkWidth => "cjk_width",
        /// Removes English possessives and dots from acronyms.
        Classic => "classic",
        /// Constructs bigrams for frequently occurring terms.
        CommonGram => "common_grams",
        /// Generates n-grams from the front or back of a token.
        EdgeNGram => "edgeNGram_v2",
        /// Removes elisions.
        Elision => "elision",
        /// German normalization.
        GermanNormalization => "german_normalization",
        /// Hindi normalization.
        HindiNormalization => "hindi_normalization",
        /// Indic normalization.
        IndicNormalization => "indic_normalization",
        /// Emits each token twice, once as keyword and once as non-keyword.
        KeywordRepeat => "keyword_repeat",
        /// High-performance stemmer for English.
        KStem => "kstem",
        /// Removes words that are too long or too short.
        Length => "length",
        /// Limits the number of tokens while indexing.
        Limit => "limit",
        /// Normalizes token text to lower case.
        Lowercase => "lowercase",
        /// Generates n-grams of the given size(s).
        NGram => "nGram_v2",
        /// Persian normalization.
        PersianNormalization => "persian_normalization",
        /// Creates tokens for phonetic matches.
        Phonetic => "phonetic",
        /// Porter stemming.
        PorterStem => "porter_stem",
        /// Reverses the token string.
        Reverse => "reverse",
        /// Scandinavian normalization.
        ScandinavianNormalization => "scandinavian_normalization",
        /// Folds Scandinavian characters.
        ScandinavianFoldingNormalization => "scandinavian_folding",
        /// Creates combinations of tokens as a single token.
        Shingle => "shingle",
        /// Stems words using a Snowball-generated stemmer.
        Snowball => "snowball",
        /// Sorani normalization.
        SoraniNormalization => "sorani_normalization",
        /// Language-specific stemming.
        Stemmer => "stemmer",
        /// Removes stop words.
        Stopwords => "stopwords",
        /// Trims leading and trailing whitespace.
        Trim => "trim",
        /// Truncates terms to a specific length.
        Truncate => "truncate",
        /// Filters out tokens with the same text as the previous token.
        Unique => "unique",
        /// Normalizes token text to upper case.
        Uppercase => "uppercase",
        /// Splits words into subwords.
        WordDelimiter => "word_delimiter",
    }
}

azure_sdk_core::expandable_enum! {
    /// Built-in char filters, or the name of a custom char filter.
    pub enum CharFilterName {
        /// Strips HTML constructs.
        HtmlStrip => "html_strip",
    }
}

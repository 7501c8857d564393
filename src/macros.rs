//! # Internal Macros
//!
//! ## large_record_fields!
//!
//! Holds the one declarative table of every `LargeRecord` field: its ordinal
//! name and its schema tag, grouped by value kind. The table is handed to a
//! callback macro, so each representation that needs the full field set
//! (the model struct and its serializer, the field descriptors, the schema
//! message and the projection) is expanded from the same list.
//!
//! ### Usage
//!
//! ```ignore
//! macro_rules! count_strings {
//!     (nested: [$($n:ident $nt:tt),* $(,)?], /* ...every group... */) => { /* ... */ };
//! }
//!
//! large_record_fields!(count_strings);
//! ```
//!
//! Groups, in wire order: `nested` (optional `MidRecord`), `int`, `long`,
//! `double`, `boolean`, `float`, `short`, `byte`, `character` (non-nullable
//! primitives), `boxed_int`, `boxed_long`, `boxed_double`, `boxed_bool`
//! (nullable scalars), `string_list`, `int_list`, `string_map`
//! (collections) and `string` (optional text).

/// Expands `$callback!` with the complete `LargeRecord` field table.
macro_rules! large_record_fields {
    ($callback:ident) => {
        $callback! {
            nested: [
                ref1 "1", ref2 "2", ref3 "3", ref4 "4", ref5 "5",
                ref6 "6", ref7 "7", ref8 "8", ref9 "9", ref10 "10",
                ref11 "11", ref12 "12", ref13 "13", ref14 "14", ref15 "15",
                ref16 "16", ref17 "17", ref18 "18", ref19 "19", ref20 "20",
            ],
            int: [
                field21 "21", field22 "22", field23 "23", field24 "24", field25 "25",
                field26 "26", field27 "27", field28 "28", field29 "29", field30 "30",
            ],
            long: [
                field31 "31", field32 "32", field33 "33", field34 "34", field35 "35",
                field36 "36", field37 "37", field38 "38", field39 "39", field40 "40",
            ],
            double: [
                field41 "41", field42 "42", field43 "43", field44 "44", field45 "45",
                field46 "46", field47 "47", field48 "48", field49 "49", field50 "50",
            ],
            boolean: [
                field51 "51", field52 "52", field53 "53", field54 "54", field55 "55",
                field56 "56", field57 "57", field58 "58", field59 "59", field60 "60",
            ],
            float: [
                field61 "61", field62 "62", field63 "63", field64 "64", field65 "65",
                field66 "66", field67 "67", field68 "68", field69 "69", field70 "70",
            ],
            short: [
                field71 "71", field72 "72", field73 "73", field74 "74", field75 "75",
                field76 "76", field77 "77", field78 "78", field79 "79", field80 "80",
            ],
            byte: [
                field81 "81", field82 "82", field83 "83", field84 "84", field85 "85",
                field86 "86", field87 "87", field88 "88", field89 "89", field90 "90",
            ],
            character: [
                field91 "91", field92 "92", field93 "93", field94 "94", field95 "95",
                field96 "96", field97 "97", field98 "98", field99 "99", field100 "100",
            ],
            boxed_int: [
                field101 "101", field102 "102", field103 "103", field104 "104", field105 "105",
            ],
            boxed_long: [
                field106 "106", field107 "107", field108 "108",
            ],
            boxed_double: [
                field109 "109", field110 "110",
            ],
            boxed_bool: [
                field111 "111", field112 "112",
            ],
            string_list: [
                field113 "113",
            ],
            int_list: [
                field114 "114",
            ],
            string_map: [
                field115 "115",
            ],
            string: [
                field116 "116", field117 "117", field118 "118", field119 "119", field120 "120",
                field121 "121", field122 "122", field123 "123", field124 "124", field125 "125",
                field126 "126", field127 "127", field128 "128", field129 "129", field130 "130",
                field131 "131", field132 "132", field133 "133", field134 "134", field135 "135",
                field136 "136", field137 "137", field138 "138", field139 "139", field140 "140",
                field141 "141", field142 "142", field143 "143", field144 "144", field145 "145",
                field146 "146", field147 "147", field148 "148", field149 "149", field150 "150",
                field151 "151", field152 "152", field153 "153", field154 "154", field155 "155",
                field156 "156", field157 "157", field158 "158", field159 "159", field160 "160",
                field161 "161", field162 "162", field163 "163", field164 "164", field165 "165",
                field166 "166", field167 "167", field168 "168", field169 "169", field170 "170",
                field171 "171", field172 "172", field173 "173", field174 "174", field175 "175",
                field176 "176", field177 "177", field178 "178", field179 "179", field180 "180",
                field181 "181", field182 "182", field183 "183", field184 "184", field185 "185",
                field186 "186", field187 "187", field188 "188", field189 "189", field190 "190",
                field191 "191", field192 "192", field193 "193", field194 "194", field195 "195",
                field196 "196", field197 "197", field198 "198", field199 "199", field200 "200",
            ],
        }
    };
}

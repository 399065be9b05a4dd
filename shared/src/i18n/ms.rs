//! Bahasa Melayu locale table

pub(super) const TABLE: &[(&str, &str)] = &[
    // Login screen
    ("welcome", "Selamat Datang ke"),
    ("guest_login", "Teruskan sebagai Tetamu"),
    ("phone_login", "Teruskan dengan Nombor Telefon"),
    ("register_new", "Daftar Akaun Baharu"),
    ("login_description", "Mulakan pengalaman membeli-belah pintar anda"),
    ("powered_by", "Dikuasakan oleh Teknologi SwiftCart"),
    // Phone login dialog
    ("enter_phone", "Masukkan Nombor Telefon"),
    ("phone_number", "Nombor Telefon"),
    ("continue", "Teruskan"),
    ("enter_otp", "Masukkan Kod Pengesahan"),
    ("otp_sent", "Kami telah menghantar kod 6 digit ke"),
    ("verify", "Sahkan"),
    ("resend_code", "Hantar Semula Kod"),
    ("registration_title", "Pendaftaran Berjaya"),
    // Registration form
    ("full_name", "Nama Penuh"),
    ("register", "Daftar"),
    ("create_account", "Cipta Akaun Anda"),
    // User profile & points
    ("my_points", "Mata Saya"),
    ("points", "Mata"),
    ("purchase_history", "Sejarah Pembelian"),
    ("logout", "Log Keluar"),
    ("no_purchase_history", "Tiada sejarah pembelian lagi"),
    ("date", "Tarikh"),
    ("amount", "Jumlah"),
    ("item_name", "Nama Barangan"),
    ("brand", "Jenama"),
    ("qty", "Kuantiti"),
    // Home screen
    ("home_title", "Papan Pemuka Beli-belah Pintar"),
    ("find_items", "Cari Barangan"),
    ("shopping_cart", "Troli Beli-belah"),
    ("items_detected", "Barangan Dikesan"),
    ("total_amount", "Jumlah Keseluruhan"),
    ("quick_view", "Lihat Pantas"),
    ("simulate_scan", "Simulasi Pengesanan Barangan"),
    ("auto_detect", "Pengesanan Auto"),
    ("auto_detect_desc", "Kamera & sensor berat aktif"),
    // Navigation
    ("navigation_active", "Navigasi Aktif"),
    ("store_map", "Peta Kedai"),
    ("turn_by_turn", "Arahan Langkah demi Langkah"),
    ("you_are_here", "Anda di sini"),
    ("entrance", "Pintu Masuk"),
    ("walk_straight", "Berjalan terus melalui"),
    ("estimated_distance", "Anggaran jarak berjalan kaki"),
    ("meters", "meter"),
    ("item_found", "Barangan Dijumpai - Tutup Navigasi"),
    ("navigation_started", "Navigasi dimulakan"),
    // Search
    ("search_items", "Cari Barangan"),
    ("all_categories", "Semua Kategori"),
    ("all_brands", "Semua Jenama"),
    ("compare_brands", "Bandingkan Jenama"),
    ("navigate", "Navigasi"),
    ("promotion", "Promosi"),
    ("no_items_found", "Tiada barangan dijumpai"),
    // Cart
    ("view_cart", "Lihat Troli & Bayar"),
    ("cart_summary", "Ringkasan Troli"),
    ("quantity", "Kuantiti"),
    ("remove", "Buang"),
    ("proceed_payment", "Teruskan ke Pembayaran"),
    ("continue_shopping", "Teruskan Membeli-belah"),
    ("empty_cart", "Troli anda kosong"),
    ("start_shopping", "Mula menambah barangan ke troli anda"),
    // Payment
    ("payment", "Pembayaran"),
    ("order_summary", "Ringkasan Pesanan"),
    ("items", "barangan"),
    ("subtotal", "Subjumlah"),
    ("tax", "Cukai (6%)"),
    ("total", "Jumlah"),
    ("payment_method", "Kaedah Pembayaran"),
    ("credit_card", "Kad Kredit/Debit"),
    ("e_wallet", "Dompet Elektronik"),
    ("cash", "Tunai"),
    ("confirm_payment", "Sahkan Pembayaran"),
    ("cancel", "Batal"),
    ("payment_verified", "Pembayaran disahkan dengan jayanya"),
    // Success
    ("payment_successful", "Pembayaran Berjaya!"),
    ("thank_you", "Terima kasih kerana membeli-belah dengan kami"),
    ("receipt_sent", "Resit anda telah dihantar ke e-mel anda"),
    ("exit_store", "Keluar dari Kedai"),
    // Chatbot
    ("chatbot_title", "Pembantu SwiftCart"),
    ("chatbot_subtitle", "Sentiasa bersedia membantu"),
    ("type_message", "Taip mesej anda..."),
    ("quick_actions", "Tindakan pantas:"),
    ("not_in_stock", "Tiada stok"),
    // Brand comparison
    ("brand_comparison", "Perbandingan Jenama"),
    ("comparing", "Membandingkan"),
    ("products", "produk"),
    ("best_value", "Nilai Terbaik"),
    // Common
    ("back", "Kembali"),
    ("close", "Tutup"),
    ("ok", "OK"),
    ("loading", "Memuatkan..."),
    ("error", "Ralat"),
    ("success", "Berjaya"),
];
